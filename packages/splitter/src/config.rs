//! Configuration constants and validation functions for the splitter.

use std::path::Path;

use crate::error::{Result, SplitterError};

/// Name of the table-of-contents section that is never split out.
pub const CONTENT_SECTION_NAME: &str = "Content";

/// Companion file listing every check with its description.
///
/// Resolved against the working directory.
pub const DEFAULT_CHECKS_FILE: &str = "checks.xml";

/// Site navigation manifest, relative to the xdocs directory.
pub const DEFAULT_SITE_MANIFEST: &str = "../site/site.xml";

/// Name of the generated overview page in the target directory.
pub const INDEX_FILE_NAME: &str = "index.xml";

/// Extension of xdoc sources.
pub const XDOC_EXTENSION: &str = "xml";

/// Extension of rendered pages, as used in hrefs.
pub const HTML_EXTENSION: &str = "html";

/// Href prefixes that are never rewritten: external URLs, javadoc, in-page anchors.
pub const PRESERVED_HREF_PREFIXES: [&str; 3] = ["http", "apidocs", "#"];

/// Namespace declarations the wrapper already carries.
///
/// Stripped from a section's markup before it is embedded.
pub const XDOC_NAMESPACE_DECLARATIONS: &str = concat!(
    r#" xmlns="http://maven.apache.org/XDOC/2.0""#,
    r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
);

/// Longest single-line navigation item (newline included) before it is wrapped.
pub const NAV_ITEM_WRAP_WIDTH: usize = 100;

/// Indentation quirk in `checks.xml` descriptions: continuation lines carry
/// 14 spaces where the generated table needs 12.
pub const DESCRIPTION_INDENT_FROM: &str = "              ";

/// See [`DESCRIPTION_INDENT_FROM`].
pub const DESCRIPTION_INDENT_TO: &str = "            ";

/// Validate the navigation title.
///
/// The title ends up in a one-line manifest entry and in file content, so it
/// must be non-blank and single-line.
///
/// # Examples
/// ```
/// use xdoc_splitter::config::validate_title;
///
/// assert!(validate_title("Naming").is_ok());
/// assert!(validate_title("Block Checks").is_ok());
/// assert!(validate_title("  ").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() || title.contains(['\n', '\r']) {
        return Err(SplitterError::InvalidTitle(title.to_string()));
    }
    Ok(())
}

/// Validate that the input xdoc exists.
///
/// # Returns
/// * `Ok(())` if the path exists
/// * `Err(SplitterError::MissingFile)` otherwise
pub fn validate_input_file(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(SplitterError::MissingFile(path.to_path_buf()))
    }
}

/// Strip the xdoc extension from an input file name, for the closing reminder.
///
/// # Examples
/// ```
/// use xdoc_splitter::config::reminder_stem;
///
/// assert_eq!(reminder_stem("config_naming.xml"), "config_naming");
/// assert_eq!(reminder_stem("notes"), "notes");
/// ```
pub fn reminder_stem(file_name: &str) -> &str {
    file_name.split(".xml").next().unwrap_or(file_name)
}
