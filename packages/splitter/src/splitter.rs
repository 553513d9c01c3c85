//! Turning each section into its own xdoc page.
//!
//! The section markup is copied from the source text as-is; only the values
//! of rewritten `href` attributes change.

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::config::XDOC_NAMESPACE_DECLARATIONS;
use crate::error::Result;
use crate::links::DocumentIndex;
use crate::types::Section;
use crate::xml::{escape_attribute, wrap_in_document};

/// Render the standalone page for `section`.
///
/// `page_dir` is the absolute directory the page will be written to; local
/// links are recomputed relative to it.
pub fn render_section(
    source: &str,
    section: &Section,
    index: &DocumentIndex,
    page_dir: &Path,
) -> Result<String> {
    let mut replacements: Vec<(Range<usize>, String)> = Vec::new();
    for anchor in &section.anchors {
        if let Some(href) = index.rewrite(&anchor.href, page_dir, &section.name)? {
            replacements.push((anchor.value_range.clone(), escape_attribute(&href).into_owned()));
        }
    }
    replacements.sort_by_key(|(range, _)| range.start);

    let mut markup = String::with_capacity(section.range.len());
    let mut cursor = section.range.start;
    for (range, value) in &replacements {
        markup.push_str(&source[cursor..range.start]);
        markup.push_str(value);
        cursor = range.end;
    }
    markup.push_str(&source[cursor..section.range.end]);

    let body = markup.replace(XDOC_NAMESPACE_DECLARATIONS, "");
    Ok(wrap_in_document(body.trim(), &section.name))
}

/// Path of the page for `section` inside `target_dir`.
pub fn section_path(target_dir: &Path, section: &Section) -> PathBuf {
    target_dir.join(section.file_name())
}
