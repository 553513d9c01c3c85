//! The overview page listing every split section with its description.
//!
//! Descriptions are not taken from the sections themselves but from the
//! hand-maintained `checks.xml` table, so both pages stay consistent.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::Document;

use crate::config::{DESCRIPTION_INDENT_FROM, DESCRIPTION_INDENT_TO};
use crate::error::{Result, SplitterError};
use crate::types::{IndexRow, Section};
use crate::xml::{descendants_named, element_children, escape_attribute, escape_text, wrap_in_document};

/// A `tr` of the companion table.
#[derive(Debug, Clone)]
struct CompanionRow {
    /// Leading text of every link in the row.
    link_texts: Vec<String>,

    /// Leading text of the second cell, if the row has one.
    description: Option<String>,
}

/// The companion table, parsed once.
#[derive(Debug)]
pub struct CompanionTable {
    path: PathBuf,
    rows: Vec<CompanionRow>,
}

impl CompanionTable {
    /// Read and parse the companion file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(path, &text)
    }

    /// Parse companion content. `path` is used for error messages.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let doc = Document::parse(text).map_err(|source| SplitterError::XmlParse {
            path: path.to_path_buf(),
            source,
        })?;

        let rows = descendants_named(doc.root_element(), "tr")
            .map(|tr| CompanionRow {
                link_texts: descendants_named(tr, "a")
                    .filter_map(|a| a.text())
                    .map(str::to_string)
                    .collect(),
                description: element_children(tr)
                    .nth(1)
                    .map(|td| td.text().unwrap_or_default().to_string()),
            })
            .filter(|row| !row.link_texts.is_empty())
            .collect::<Vec<_>>();

        tracing::debug!(rows = rows.len(), path = %path.display(), "Loaded companion table");
        Ok(Self {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// Build the index row for a section.
    ///
    /// A row whose link text is exactly the section name is preferred;
    /// otherwise the first row whose link text contains the name is used.
    ///
    /// # Errors
    /// * `MissingIndexRow` if no link mentions the section
    /// * `MissingElement` if the matched row has no description cell
    pub fn row_for(&self, section: &Section) -> Result<IndexRow> {
        let name = section.name.as_str();
        let row = self
            .rows
            .iter()
            .find(|row| row.link_texts.iter().any(|t| t.trim() == name))
            .or_else(|| {
                self.rows
                    .iter()
                    .find(|row| row.link_texts.iter().any(|t| t.contains(name)))
            })
            .ok_or_else(|| SplitterError::MissingIndexRow {
                name: name.to_string(),
                path: self.path.clone(),
            })?;

        let description =
            row.description
                .as_deref()
                .ok_or_else(|| SplitterError::MissingElement {
                    element: "td".to_string(),
                    context: format!("row for {name} in {}", self.path.display()),
                })?;

        Ok(IndexRow {
            name: name.to_string(),
            page: section.page_name(),
            description: normalize_description(description),
        })
    }
}

/// Trim a description and fix the companion table's extra indentation.
///
/// # Examples
/// ```
/// use xdoc_splitter::index::normalize_description;
///
/// assert_eq!(normalize_description("  Checks naming.  "), "Checks naming.");
/// ```
pub fn normalize_description(raw: &str) -> String {
    raw.trim()
        .replace(DESCRIPTION_INDENT_FROM, DESCRIPTION_INDENT_TO)
}

fn render_row(row: &IndexRow) -> String {
    let page = escape_attribute(&row.page);
    let fragment = escape_attribute(&row.name);
    let name = escape_text(&row.name);
    let description = escape_text(&row.description);
    format!(
        r#"        <tr>
          <td>
            <a href="{page}#{fragment}">
              {name}
            </a>
          </td>
          <td>
            {description}
          </td>
        </tr>
"#
    )
}

/// Render the index page: one table row per section, titled `title`.
pub fn render_index(rows: &[IndexRow], title: &str) -> String {
    let table_rows: String = rows.iter().map(render_row).collect();
    let section_name = escape_attribute(title);
    let body = format!(
        r#"<section name="{section_name} Checks">
      <div class="wrapper">
        <table>
{}
        </table>
      </div>
    </section>"#,
        table_rows.trim_end()
    );
    wrap_in_document(&body, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHECKS: &str = r#"<document xmlns="http://maven.apache.org/XDOC/2.0">
  <body>
    <section name="Checks">
      <table>
        <tr><th>Check</th><th>Description</th></tr>
        <tr>
          <td><a href="config_x.html#ImportOrder">ImportOrder</a></td>
          <td>  Checks the ordering of imports.  </td>
        </tr>
        <tr>
          <td><a href="config_x.html#Import">Import</a></td>
          <td>
              Checks imports
              across lines.
          </td>
        </tr>
        <tr>
          <td><a href="config_x.html#NoDescription">NoDescription</a></td>
        </tr>
        <tr>
          <td><a href="config_x.html#RuleOne">RuleOne</a></td>
          <td>  Checks for naming conventions  </td>
        </tr>
      </table>
    </section>
  </body>
</document>"#;

    fn table() -> CompanionTable {
        CompanionTable::parse(Path::new("checks.xml"), CHECKS).unwrap()
    }

    fn section(name: &str) -> Section {
        Section {
            name: name.to_string(),
            range: 0..0,
            anchors: Vec::new(),
        }
    }

    #[test]
    fn test_row_for_trims_description() {
        let row = table().row_for(&section("RuleOne")).unwrap();
        assert_eq!(
            row,
            IndexRow {
                name: "RuleOne".to_string(),
                page: "ruleone.html".to_string(),
                description: "Checks for naming conventions".to_string(),
            }
        );
    }

    #[test]
    fn test_row_for_prefers_exact_link_text() {
        let row = table().row_for(&section("Import")).unwrap();
        assert_eq!(row.description, "Checks imports\n            across lines.");
    }

    #[test]
    fn test_row_for_falls_back_to_containment() {
        let row = table().row_for(&section("Order")).unwrap();
        assert_eq!(row.description, "Checks the ordering of imports.");
    }

    #[test]
    fn test_row_for_missing_row() {
        let result = table().row_for(&section("Unknown"));
        assert!(matches!(
            result,
            Err(SplitterError::MissingIndexRow { name, .. }) if name == "Unknown"
        ));
    }

    #[test]
    fn test_row_for_missing_description_cell() {
        let result = table().row_for(&section("NoDescription"));
        assert!(matches!(result, Err(SplitterError::MissingElement { .. })));
    }

    #[test]
    fn test_normalize_description_indent() {
        let raw = format!("a\n{}b", " ".repeat(14));
        assert_eq!(normalize_description(&raw), format!("a\n{}b", " ".repeat(12)));
    }

    #[test]
    fn test_render_index() {
        let rows = [IndexRow {
            name: "RuleOne".to_string(),
            page: "ruleone.html".to_string(),
            description: "Checks <names> & more".to_string(),
        }];

        let page = render_index(&rows, "X");
        let expected_body = r#"<section name="X Checks">
      <div class="wrapper">
        <table>
        <tr>
          <td>
            <a href="ruleone.html#RuleOne">
              RuleOne
            </a>
          </td>
          <td>
            Checks &lt;names&gt; &amp; more
          </td>
        </tr>
        </table>
      </div>
    </section>"#;
        assert_eq!(page, wrap_in_document(expected_body, "X"));
        assert!(Document::parse(&page).is_ok());
    }
}
