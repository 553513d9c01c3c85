//! The standard xdoc page wrapper and escaping for generated markup.

use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape};

/// Escape character data (`&`, `<`, `>`).
pub fn escape_text(text: &str) -> Cow<'_, str> {
    partial_escape(text)
}

/// Escape a value for a double- or single-quoted attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value)
}

/// Wrap page content in the standard xdoc document.
///
/// `body` is inserted verbatim under `<body>`; `title` is escaped.
///
/// # Examples
/// ```
/// use xdoc_splitter::xml::wrap_in_document;
///
/// let page = wrap_in_document("<section name=\"A\"/>", "A");
/// assert!(page.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// assert!(page.contains("<title>A</title>"));
/// assert!(page.ends_with("</document>"));
/// ```
pub fn wrap_in_document(body: &str, title: &str) -> String {
    let title = escape_text(title);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<document xmlns="http://maven.apache.org/XDOC/2.0"
  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
  xsi:schemaLocation="http://maven.apache.org/XDOC/2.0 https://maven.apache.org/xsd/xdoc-2.0.xsd">
  <head>
    <title>{title}</title>
  </head>
  <body>
    {body}
  </body>
</document>"#
    )
}
