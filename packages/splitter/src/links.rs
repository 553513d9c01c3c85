//! Resolution and rewriting of links between xdoc pages.
//!
//! A page moved into a subdirectory keeps working links only if every
//! relative href is recomputed from its new location. Targets are looked up
//! by file name anywhere under a search root, so the root is scanned once
//! into a [`DocumentIndex`].

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::{HTML_EXTENSION, XDOC_EXTENSION};
use crate::error::{Result, SplitterError};
use crate::types::LinkTarget;

/// xdoc files under a search root, keyed by file name.
///
/// The root is walked depth-first with sorted names, files of a directory
/// before its subdirectories. When a name occurs more than once the first
/// one in that order wins.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    documents: HashMap<String, PathBuf>,
}

impl DocumentIndex {
    /// Scan `root` for xdoc files.
    ///
    /// Unreadable subdirectories are skipped with a warning; an unreadable
    /// root is an error.
    pub fn build(root: &Path) -> Result<Self> {
        let root = absolute_path(root)?;
        let mut index = Self::default();

        let walker = WalkDir::new(&root).sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    tracing::warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if is_xdoc(&entry) {
                index.register(entry.path());
            }
        }

        if index.is_empty() {
            tracing::warn!(root = %root.display(), "No xdoc documents under search root");
        }
        tracing::debug!(
            root = %root.display(),
            documents = index.len(),
            "Built document index"
        );
        Ok(index)
    }

    /// Add a document unless its file name is already known.
    pub fn register(&mut self, path: &Path) {
        let Some(name) = path.file_name() else {
            return;
        };
        let name = name.to_string_lossy().into_owned();

        if let Some(existing) = self.documents.get(&name) {
            if existing != path {
                tracing::warn!(
                    kept = %existing.display(),
                    ignored = %path.display(),
                    "Duplicate document name"
                );
            }
            return;
        }
        self.documents.insert(name, path.to_path_buf());
    }

    /// Find the document for a link stem, e.g. `config_misc` → `.../config_misc.xml`.
    pub fn resolve(&self, stem: &str) -> Option<&Path> {
        self.documents
            .get(&format!("{stem}.{XDOC_EXTENSION}"))
            .map(PathBuf::as_path)
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Compute the href an anchor needs when its page lives in `page_dir`.
    ///
    /// Returns `Ok(None)` for hrefs that are kept as they are.
    ///
    /// # Errors
    /// * `BrokenLink` if the linked document is not in the index
    /// * `UnrecognizedLink` if a local href has no `.html` marker
    pub fn rewrite(&self, href: &str, page_dir: &Path, section: &str) -> Result<Option<String>> {
        match LinkTarget::classify(href) {
            LinkTarget::Preserved => Ok(None),
            LinkTarget::Unrecognized => Err(SplitterError::UnrecognizedLink {
                href: href.to_string(),
                section: section.to_string(),
            }),
            LinkTarget::Local { stem, fragment } => {
                let target = self
                    .resolve(stem)
                    .ok_or_else(|| SplitterError::BrokenLink {
                        stem: stem.to_string(),
                    })?;
                let page = target.with_extension(HTML_EXTENSION);
                let rewritten = format!("{}{fragment}", to_href(&relative_path(page_dir, &page)));
                tracing::debug!(from = href, to = %rewritten, section, "Rewrote link");
                Ok(Some(rewritten))
            }
        }
    }
}

fn is_xdoc(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .is_some_and(|ext| ext == XDOC_EXTENSION)
}

/// Make a path absolute against the working directory and normalize it.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    Ok(normalize_path(&std::path::absolute(path)?))
}

/// Lexically resolve `.` and `..` components.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use xdoc_splitter::links::normalize_path;
///
/// assert_eq!(normalize_path(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::CurDir => {}
            Component::Normal(name) => result.push(name),
            Component::RootDir => result.push(Component::RootDir.as_os_str()),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
        }
    }
    result
}

/// Path from directory `from` to `to`. Both must be absolute and normalized.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use xdoc_splitter::links::relative_path;
///
/// let rel = relative_path(Path::new("/xdocs/checks/naming"), Path::new("/xdocs/config_misc.html"));
/// assert_eq!(rel, PathBuf::from("../../config_misc.html"));
/// ```
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from.len() {
        result.push(Component::ParentDir.as_os_str());
    }
    for component in &to[common..] {
        result.push(component.as_os_str());
    }
    if result.as_os_str().is_empty() {
        result.push(Component::CurDir.as_os_str());
    }
    result
}

/// Render a path as an href, always with `/` separators.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use xdoc_splitter::links::to_href;
///
/// assert_eq!(to_href(Path::new("../checks/a.html")), "../checks/a.html");
/// assert_eq!(to_href(Path::new("/docs/checks/a.html")), "/docs/checks/a.html");
/// ```
pub fn to_href(path: &Path) -> String {
    let mut href = String::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => href.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => href.push('/'),
            other => {
                if !href.is_empty() && !href.ends_with('/') {
                    href.push('/');
                }
                href.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    href
}
