//! Loading the multi-section xdoc and locating the sections to split.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};

use crate::config::{validate_input_file, CONTENT_SECTION_NAME};
use crate::error::{Result, SplitterError};
use crate::types::{Anchor, Section};
use crate::xml::descendants_named;

/// The input xdoc: raw text plus the sections found in it.
///
/// Sections only hold byte ranges into `text`, so the tree itself is not
/// kept around after loading.
#[derive(Debug)]
pub struct SourceDocument {
    path: PathBuf,
    text: String,
    sections: Vec<Section>,
}

impl SourceDocument {
    /// Read and parse the input file.
    ///
    /// # Errors
    /// * `MissingFile` if `path` does not exist
    /// * `XmlParse` if the content is not well-formed
    /// * `MissingSectionName` for a section without a name
    /// * `NoSectionsFound` if nothing but `Content` is present
    pub fn load(path: &Path) -> Result<Self> {
        validate_input_file(path)?;
        let text = fs::read_to_string(path)?;
        Self::parse(path, text)
    }

    /// Parse already loaded content. `path` is used for error messages.
    pub fn parse(path: &Path, text: String) -> Result<Self> {
        let sections = {
            let doc = Document::parse(&text).map_err(|source| SplitterError::XmlParse {
                path: path.to_path_buf(),
                source,
            })?;
            collect_sections(&doc)?
        };

        if sections.is_empty() {
            return Err(SplitterError::NoSectionsFound);
        }
        tracing::debug!(count = sections.len(), path = %path.display(), "Loaded sections");

        Ok(Self {
            path: path.to_path_buf(),
            text,
            sections,
        })
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sections to split, in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// Every `section` element except `Content`, at any depth.
fn collect_sections(doc: &Document<'_>) -> Result<Vec<Section>> {
    descendants_named(doc.root_element(), "section")
        .filter(|node| node.attribute("name") != Some(CONTENT_SECTION_NAME))
        .map(|node| -> Result<Section> {
            let name = node
                .attribute("name")
                .filter(|name| !name.trim().is_empty())
                .ok_or(SplitterError::MissingSectionName {
                    offset: node.range().start,
                })?;

            Ok(Section {
                name: name.to_string(),
                range: node.range(),
                anchors: collect_anchors(node),
            })
        })
        .collect()
}

fn collect_anchors(section: Node<'_, '_>) -> Vec<Anchor> {
    descendants_named(section, "a")
        .filter_map(|anchor| {
            anchor
                .attributes()
                .find(|attr| attr.name() == "href")
                .map(|attr| Anchor {
                    href: attr.value().to_string(),
                    value_range: attr.range_value(),
                })
        })
        .collect()
}
