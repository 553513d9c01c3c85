//! Site navigation: the menu block for the split pages and patching it into
//! `site.xml`.
//!
//! The manifest is edited as text. Only the placeholder entry is replaced,
//! every other byte of the file is kept as it was.

use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};

use crate::config::{HTML_EXTENSION, INDEX_FILE_NAME, NAV_ITEM_WRAP_WIDTH};
use crate::error::{Result, SplitterError};
use crate::links::to_href;
use crate::types::Section;
use crate::writer::write_atomic;
use crate::xml::{escape_attribute, escape_text};

fn page_href(target_dir: &Path, page: impl AsRef<Path>) -> String {
    to_href(&target_dir.join(page))
}

fn render_item(name: &str, href: &str) -> String {
    let name = escape_attribute(name);
    let href = escape_attribute(href);
    let line = format!("          <item name=\"{name}\" href=\"{href}\"/>\n");
    if line.chars().count() > NAV_ITEM_WRAP_WIDTH {
        format!("          <item name=\"{name}\"\n                href=\"{href}\"/>\n")
    } else {
        line
    }
}

/// Render the collapsible menu entry for `title` with one child per section.
///
/// Hrefs are relative to the site root, i.e. prefixed with `target_dir`.
pub fn render_navigation(sections: &[Section], target_dir: &Path, title: &str) -> String {
    let items: String = sections
        .iter()
        .map(|section| render_item(&section.name, &page_href(target_dir, &section.page_name())))
        .collect();

    let index_page = Path::new(INDEX_FILE_NAME).with_extension(HTML_EXTENSION);
    format!(
        "<item name=\"{}\" href=\"{}\" collapse=\"true\">\n{}\n        </item>",
        escape_attribute(title),
        escape_attribute(&page_href(target_dir, index_page)),
        items.trim_end()
    )
}

/// Pattern for the one-line placeholder `<item name="{title}" .../>`.
///
/// The name is matched as written by hand (`Author's`) or escaped
/// (`Author&apos;s`, `A &amp; B`).
fn placeholder_pattern(title: &str) -> Result<Regex> {
    let mut spellings = vec![title.to_string()];
    for spelling in [escape_text(title), escape_attribute(title)] {
        if !spellings.iter().any(|known| *known == spelling) {
            spellings.push(spelling.into_owned());
        }
    }
    let names: Vec<String> = spellings.iter().map(|name| regex::escape(name)).collect();

    let pattern = format!(r#"<item name="(?:{})" .+"/>"#, names.join("|"));
    Regex::new(&pattern).map_err(|_| SplitterError::InvalidTitle(title.to_string()))
}

/// Replace the first placeholder for `title` in `manifest` with `fragment`.
///
/// Returns `None` if the manifest has no placeholder for the title.
pub fn patch_manifest(manifest: &str, title: &str, fragment: &str) -> Result<Option<String>> {
    let pattern = placeholder_pattern(title)?;
    if !pattern.is_match(manifest) {
        return Ok(None);
    }
    Ok(Some(pattern.replacen(manifest, 1, NoExpand(fragment)).into_owned()))
}

/// Patch the manifest file at `path` in place.
///
/// # Errors
/// * `ManifestPatternMiss` if there is no placeholder for `title`
pub fn update_manifest(path: &Path, title: &str, fragment: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let patched = patch_manifest(&content, title, fragment)?.ok_or_else(|| {
        SplitterError::ManifestPatternMiss {
            title: title.to_string(),
            path: path.to_path_buf(),
        }
    })?;
    write_atomic(path, &patched)?;
    tracing::info!(path = %path.display(), title, "Updated navigation manifest");
    Ok(())
}
