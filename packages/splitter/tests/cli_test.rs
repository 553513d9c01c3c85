//! End-to-end tests for the splitter binary.
//!
//! Each test builds a small documentation tree in a temp directory:
//!
//! ```text
//! <tmp>/xdocs/config_x.xml        input, working directory
//! <tmp>/xdocs/checks.xml          companion table
//! <tmp>/xdocs/config_misc.xml     link target
//! <tmp>/site/site.xml             navigation manifest
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

const INPUT: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<document xmlns="http://maven.apache.org/XDOC/2.0"
  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
  xsi:schemaLocation="http://maven.apache.org/XDOC/2.0 https://maven.apache.org/xsd/xdoc-2.0.xsd">
  <head>
    <title>X</title>
  </head>
  <body>
    <section name="Content">
      <macro name="toc">
        <param name="fromDepth" value="1"/>
      </macro>
    </section>

    <section name="RuleOne">
      <p>Since Checkstyle 10.0</p>
      <subsection name="Description" id="Description">
        <p>
          Works like <a href="config_misc.html#TodoComment">TodoComment</a>,
          see <a href="https://checkstyle.org/">the site</a>,
          <a href="apidocs/com/puppycrawl/RuleOneCheck.html">javadoc</a>
          and <a href="#Examples">examples</a>.
        </p>
      </subsection>
    </section>
  </body>
</document>
"##;

const CHECKS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document xmlns="http://maven.apache.org/XDOC/2.0">
  <body>
    <section name="Checks">
      <table>
        <tr>
          <td>
            <a href="config_x.html#RuleOne">
              RuleOne
            </a>
          </td>
          <td>
              Checks for naming conventions
          </td>
        </tr>
      </table>
    </section>
  </body>
</document>
"#;

const SITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project name="checkstyle">
  <body>
    <menu name="Checks">
        <item name="Annotations" href="config_annotation.html"/>
        <item name="X" href="config_x.html"/>
        <item name="Y" href="config_y.html"/>
    </menu>
  </body>
</project>
"#;

struct DocsTree {
    _dir: TempDir,
    xdocs: PathBuf,
    site: PathBuf,
}

impl DocsTree {
    fn new(input: &str) -> Self {
        let dir = tempdir().unwrap();
        let xdocs = dir.path().join("xdocs");
        let site = dir.path().join("site").join("site.xml");
        fs::create_dir_all(&xdocs).unwrap();
        fs::create_dir_all(site.parent().unwrap()).unwrap();

        fs::write(xdocs.join("config_x.xml"), input).unwrap();
        fs::write(xdocs.join("checks.xml"), CHECKS).unwrap();
        fs::write(xdocs.join("config_misc.xml"), "<document/>").unwrap();
        fs::write(&site, SITE).unwrap();

        Self {
            _dir: dir,
            xdocs,
            site,
        }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.xdocs.join(rel)
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }
}

#[allow(deprecated)]
fn splitter(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("xdoc-splitter").unwrap();
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_split_scenario() {
    let tree = DocsTree::new(INPUT);

    splitter(&tree.xdocs)
        .args(["config_x.xml", "checks/x", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file_name: config_x.xml"))
        .stdout(predicate::str::contains("Found 1 sections"))
        .stdout(predicate::str::contains("Directory checks/x created"))
        .stdout(predicate::str::contains("checks/x/ruleone.xml created"))
        .stdout(predicate::str::contains("checks/x/index.xml created"))
        .stdout(predicate::str::contains("config_x.xml removed"))
        .stdout(predicate::str::contains("Dont forget to git grep for config_x"));

    assert!(!tree.path("config_x.xml").exists());
    assert!(!tree.path("checks/x/content.xml").exists());

    let page = tree.read("checks/x/ruleone.xml");
    let doc = roxmltree::Document::parse(&page).unwrap();
    let title = doc.descendants().find(|n| n.has_tag_name("title")).unwrap();
    assert_eq!(title.text(), Some("RuleOne"));
    assert!(page.contains(r#"<a href="../../config_misc.html#TodoComment">"#));
    assert!(page.contains(r#"<a href="https://checkstyle.org/">"#));
    assert!(page.contains(r#"<a href="apidocs/com/puppycrawl/RuleOneCheck.html">"#));
    assert!(page.contains(r##"<a href="#Examples">"##));
    assert!(page.contains("<subsection name=\"Description\" id=\"Description\">"));

    let index = tree.read("checks/x/index.xml");
    assert!(roxmltree::Document::parse(&index).is_ok());
    assert!(index.contains("<title>X</title>"));
    assert!(index.contains(r#"<section name="X Checks">"#));
    assert!(index.contains(r##"<a href="ruleone.html#RuleOne">"##));
    assert!(index.contains("\n            Checks for naming conventions\n"));

    assert_eq!(
        fs::read_to_string(&tree.site).unwrap(),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project name="checkstyle">
  <body>
    <menu name="Checks">
        <item name="Annotations" href="config_annotation.html"/>
        <item name="X" href="checks/x/index.html" collapse="true">
          <item name="RuleOne" href="checks/x/ruleone.html"/>
        </item>
        <item name="Y" href="config_y.html"/>
    </menu>
  </body>
</project>
"#
    );
}

#[test]
fn test_existing_target_dir_is_reused() {
    let tree = DocsTree::new(INPUT);
    fs::create_dir_all(tree.path("checks/x")).unwrap();
    fs::write(tree.path("checks/x/keep.txt"), "untouched").unwrap();

    splitter(&tree.xdocs)
        .args(["config_x.xml", "checks/x", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory checks/x already exists"));

    assert_eq!(tree.read("checks/x/keep.txt"), "untouched");
}

#[test]
fn test_no_sections_exits_with_status_1() {
    let input = r#"<document><body><section name="Content"/></body></document>"#;
    let tree = DocsTree::new(input);

    splitter(&tree.xdocs)
        .args(["config_x.xml", "checks/x", "X"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No sections found"));

    assert!(!tree.path("checks/x").exists());
    assert!(tree.path("config_x.xml").exists());
}

#[test]
fn test_broken_link_aborts_before_index_and_manifest() {
    let tree = DocsTree::new(&INPUT.replace("config_misc.html", "missing.html"));

    splitter(&tree.xdocs)
        .args(["config_x.xml", "checks/x", "X"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.xml not found"));

    assert!(tree.path("config_x.xml").exists());
    assert!(!tree.path("checks/x/index.xml").exists());
    assert_eq!(fs::read_to_string(&tree.site).unwrap(), SITE);
}

#[test]
fn test_missing_input_file() {
    let tree = DocsTree::new(INPUT);

    splitter(&tree.xdocs)
        .args(["config_y.xml", "checks/y", "Y"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File 'config_y.xml' does not exist"));
}

#[test]
fn test_missing_arguments_print_usage() {
    let tree = DocsTree::new(INPUT);

    splitter(&tree.xdocs)
        .args(["config_x.xml", "checks/x"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Example: xdoc-splitter config_naming.xml checks/naming Naming",
        ));

    assert!(tree.path("config_x.xml").exists());
}

#[test]
fn test_unknown_title_in_manifest_keeps_input() {
    let tree = DocsTree::new(INPUT);

    splitter(&tree.xdocs)
        .args(["config_x.xml", "checks/x", "Unlisted"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(r#"No <item name="Unlisted" .../> entry"#));

    assert!(tree.path("config_x.xml").exists());
    assert!(tree.path("checks/x/index.xml").exists());
    assert_eq!(fs::read_to_string(&tree.site).unwrap(), SITE);
}
