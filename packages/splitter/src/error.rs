//! Error types for the splitter.
//!
//! Every failure is fatal: the CLI reports it and exits with status 1.
//! Variants mirror the checks the pipeline performs, in the order it
//! performs them.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Command line could not be parsed; carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// The input xdoc does not exist.
    #[error("File '{}' does not exist", .0.display())]
    MissingFile(PathBuf),

    /// Title argument is unusable (empty or multi-line).
    #[error("Invalid title: '{0}'")]
    InvalidTitle(String),

    /// Input parsed, but no section other than `Content` was found.
    #[error("No sections found")]
    NoSectionsFound,

    /// A section to split carries no usable `name` attribute.
    #[error("Section at byte {offset} has no name attribute")]
    MissingSectionName { offset: usize },

    /// An internal link points at a document that is not in the search root.
    #[error("{stem}.xml not found")]
    BrokenLink { stem: String },

    /// A local link without the `.html` marker that rewriting relies on.
    #[error("Cannot rewrite link '{href}' in section {section}: expected <name>.html[#fragment]")]
    UnrecognizedLink { href: String, section: String },

    /// XML parsing failed.
    #[error("XML parsing failed in {}: {source}", .path.display())]
    XmlParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The companion file has no row describing a section.
    #[error("No row for section '{name}' in {}", .path.display())]
    MissingIndexRow { name: String, path: PathBuf },

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// The navigation manifest has no placeholder item for the title.
    #[error("No <item name=\"{title}\" .../> entry found in {}", .path.display())]
    ManifestPatternMiss { title: String, path: PathBuf },

    /// Failed to walk the search root.
    #[error("Failed to scan documents: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
