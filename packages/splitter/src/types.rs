//! Core data types for splitting an xdoc page.

use std::ops::Range;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_CHECKS_FILE, DEFAULT_SITE_MANIFEST, HTML_EXTENSION, PRESERVED_HREF_PREFIXES,
    XDOC_EXTENSION,
};

/// A hyperlink inside a section.
///
/// Offsets point into the source document text, so the href can be
/// replaced without re-serializing the surrounding markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    /// Attribute value with entities resolved.
    pub href: String,

    /// Byte range of the raw attribute value (between the quotes).
    pub value_range: Range<usize>,
}

/// A named section of the source document that becomes its own page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Value of the `name` attribute; page title and file stem.
    pub name: String,

    /// Byte range of the whole element, start tag to end tag.
    pub range: Range<usize>,

    /// Anchors with an `href`, in document order.
    pub anchors: Vec<Anchor>,
}

impl Section {
    /// Lower-cased name used for file names and hrefs.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }

    /// Output file name, e.g. `ruleone.xml`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{XDOC_EXTENSION}", self.slug())
    }

    /// Rendered page name, e.g. `ruleone.html`.
    #[must_use]
    pub fn page_name(&self) -> String {
        format!("{}.{HTML_EXTENSION}", self.slug())
    }
}

/// Classification of an anchor's href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// External URL, javadoc or in-page anchor; kept byte-identical.
    Preserved,

    /// Another xdoc page: `<stem>.html<fragment>`.
    Local { stem: &'a str, fragment: &'a str },

    /// Local link that does not follow the `.html` convention.
    Unrecognized,
}

impl<'a> LinkTarget<'a> {
    /// Classify an href.
    ///
    /// The fragment is everything after the first `.html`, leading `#` included.
    ///
    /// # Examples
    /// ```
    /// use xdoc_splitter::types::LinkTarget;
    ///
    /// assert_eq!(LinkTarget::classify("https://checkstyle.org"), LinkTarget::Preserved);
    /// assert_eq!(
    ///     LinkTarget::classify("config_misc.html#TodoComment"),
    ///     LinkTarget::Local { stem: "config_misc", fragment: "#TodoComment" }
    /// );
    /// ```
    #[must_use]
    pub fn classify(href: &'a str) -> Self {
        if PRESERVED_HREF_PREFIXES
            .iter()
            .any(|prefix| href.starts_with(prefix))
        {
            return LinkTarget::Preserved;
        }

        match href.split_once(".html") {
            Some((stem, fragment)) => LinkTarget::Local { stem, fragment },
            None => LinkTarget::Unrecognized,
        }
    }
}

/// One row of the generated index table.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRow {
    /// Section name, used as link text and fragment.
    pub name: String,

    /// Page the row links to, e.g. `ruleone.html`.
    pub page: String,

    /// Normalized description from the companion file.
    pub description: String,
}

/// Inputs of one splitter run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Multi-section xdoc to split; deleted on success.
    pub input: PathBuf,

    /// Directory receiving the per-section pages and `index.xml`.
    pub target_dir: PathBuf,

    /// Navigation title; also the index page title.
    pub title: String,

    /// Companion table with check descriptions.
    pub checks_file: PathBuf,

    /// Site navigation manifest patched in place.
    pub site_manifest: PathBuf,

    /// Root of the link-resolution search.
    pub search_root: PathBuf,
}

impl SplitOptions {
    /// Create options with the default companion, manifest and search root.
    #[must_use]
    pub fn new(
        input: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            target_dir: target_dir.into(),
            title: title.into(),
            checks_file: PathBuf::from(DEFAULT_CHECKS_FILE),
            site_manifest: PathBuf::from(DEFAULT_SITE_MANIFEST),
            search_root: PathBuf::from("."),
        }
    }

    /// Override the companion file.
    #[must_use]
    pub fn with_checks_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.checks_file = path.into();
        self
    }

    /// Override the navigation manifest.
    #[must_use]
    pub fn with_site_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.site_manifest = path.into();
        self
    }

    /// Override the link-resolution root.
    #[must_use]
    pub fn with_search_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_root = path.into();
        self
    }
}
