//! The splitter run: load, split, index, navigation, cleanup.
//!
//! Phases run strictly in order and stop at the first error. Files written
//! before a failure stay on disk; the input is only removed once everything
//! else succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{validate_title, INDEX_FILE_NAME};
use crate::error::Result;
use crate::index::{render_index, CompanionTable};
use crate::links::{absolute_path, DocumentIndex};
use crate::navigation::{render_navigation, update_manifest};
use crate::source::SourceDocument;
use crate::splitter::{render_section, section_path};
use crate::types::{IndexRow, SplitOptions};
use crate::writer::{ensure_dir, write_atomic, DirStatus};

/// Progress notifications, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitEvent<'a> {
    /// Input parsed; `sections` pages will be written.
    Loaded { sections: usize },
    /// Target directory checked or created.
    TargetDir { path: &'a Path, status: DirStatus },
    /// One section page written.
    SectionWritten { path: &'a Path },
    /// `index.xml` written.
    IndexWritten { path: &'a Path },
    /// Navigation manifest patched.
    ManifestUpdated { path: &'a Path },
    /// Input file deleted.
    SourceRemoved { path: &'a Path },
}

/// Files produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub target_dir_status: DirStatus,
    pub section_files: Vec<PathBuf>,
    pub index_file: PathBuf,
    pub manifest: PathBuf,
}

/// Split `options.input` into one page per section.
///
/// Relative paths in `options` are resolved against the working directory.
pub fn run(options: &SplitOptions, mut on_event: impl FnMut(SplitEvent<'_>)) -> Result<SplitReport> {
    validate_title(&options.title)?;
    let source = SourceDocument::load(&options.input)?;
    on_event(SplitEvent::Loaded {
        sections: source.sections().len(),
    });

    let target_dir_status = ensure_dir(&options.target_dir)?;
    on_event(SplitEvent::TargetDir {
        path: &options.target_dir,
        status: target_dir_status,
    });

    let section_files = split_sections(&source, options, &mut on_event)?;

    let index_file = write_index(&source, options)?;
    on_event(SplitEvent::IndexWritten { path: &index_file });

    let fragment = render_navigation(source.sections(), &options.target_dir, &options.title);
    update_manifest(&options.site_manifest, &options.title, &fragment)?;
    on_event(SplitEvent::ManifestUpdated {
        path: &options.site_manifest,
    });

    fs::remove_file(source.path())?;
    on_event(SplitEvent::SourceRemoved {
        path: source.path(),
    });

    Ok(SplitReport {
        target_dir_status,
        section_files,
        index_file,
        manifest: options.site_manifest.clone(),
    })
}

fn split_sections(
    source: &SourceDocument,
    options: &SplitOptions,
    on_event: &mut impl FnMut(SplitEvent<'_>),
) -> Result<Vec<PathBuf>> {
    let mut index = DocumentIndex::build(&options.search_root)?;
    let page_dir = absolute_path(&options.target_dir)?;
    let mut written = Vec::with_capacity(source.sections().len());

    for section in source.sections() {
        let page = render_section(source.text(), section, &index, &page_dir)?;
        let path = section_path(&options.target_dir, section);
        write_atomic(&path, &page)?;
        // Later sections may link to pages split earlier in this run.
        index.register(&absolute_path(&path)?);
        on_event(SplitEvent::SectionWritten { path: &path });
        written.push(path);
    }

    tracing::info!(count = written.len(), "Split sections");
    Ok(written)
}

fn write_index(source: &SourceDocument, options: &SplitOptions) -> Result<PathBuf> {
    let companion = CompanionTable::load(&options.checks_file)?;
    let rows = source
        .sections()
        .iter()
        .map(|section| companion.row_for(section))
        .collect::<Result<Vec<IndexRow>>>()?;

    let path = options.target_dir.join(INDEX_FILE_NAME);
    write_atomic(&path, &render_index(&rows, &options.title))?;
    Ok(path)
}
