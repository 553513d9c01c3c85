//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{reminder_stem, DEFAULT_CHECKS_FILE, DEFAULT_SITE_MANIFEST};
use crate::error::{Result, SplitterError};
use crate::pipeline::{self, SplitEvent};
use crate::types::SplitOptions;
use crate::writer::DirStatus;

const EXAMPLE: &str = "Example: xdoc-splitter config_naming.xml checks/naming Naming";

/// Split a multi-section xdoc page into one page per section.
///
/// Run from the xdocs directory: the companion `checks.xml`, the site
/// manifest and the link search are all resolved from there.
#[derive(Parser, Debug)]
#[command(name = "xdoc-splitter")]
#[command(version, about, long_about = None, after_help = EXAMPLE)]
pub struct Cli {
    /// Source xdoc with one section per check (removed on success)
    pub file_name: PathBuf,

    /// Directory for the generated pages (e.g., checks/naming)
    pub target_dir: PathBuf,

    /// Navigation title (e.g., Naming)
    pub title: String,

    /// Companion table with check descriptions
    #[arg(long, default_value = DEFAULT_CHECKS_FILE)]
    pub checks: PathBuf,

    /// Site navigation manifest to patch
    #[arg(long, default_value = DEFAULT_SITE_MANIFEST)]
    pub site: PathBuf,

    /// Directory searched for link targets
    #[arg(long, default_value = ".")]
    pub search_root: PathBuf,
}

impl Cli {
    /// Options for one pipeline run.
    pub fn to_options(&self) -> SplitOptions {
        SplitOptions::new(&self.file_name, &self.target_dir, &self.title)
            .with_checks_file(&self.checks)
            .with_site_manifest(&self.site)
            .with_search_root(&self.search_root)
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Err(SplitterError::Usage(format!("{}\n{EXAMPLE}", e.render()))),
    };

    split_command(&cli)
}

/// Execute the split.
fn split_command(cli: &Cli) -> Result<()> {
    println!("{} {}", style("file_name:").bold(), cli.file_name.display());
    println!("{} {}", style("dir:").bold(), cli.target_dir.display());
    println!("{} {}", style("title:").bold(), style(&cli.title).cyan());

    let mut bar: Option<ProgressBar> = None;
    let result = pipeline::run(&cli.to_options(), |event| report(event, &mut bar));

    if let Some(pb) = bar.take() {
        pb.finish_and_clear();
    }
    result?;

    println!(
        "{} {}",
        style("Dont forget to git grep for").yellow(),
        style(reminder_stem(&cli.file_name.to_string_lossy())).bold()
    );
    Ok(())
}

/// Print one progress line; the bar tracks the section pages.
fn report(event: SplitEvent<'_>, bar: &mut Option<ProgressBar>) {
    match event {
        SplitEvent::Loaded { sections } => {
            println!("Found {} sections", style(sections).green());
            *bar = Some(section_bar(sections));
        }
        SplitEvent::TargetDir { path, status } => {
            let status = match status {
                DirStatus::Created => style("created").green(),
                DirStatus::Existing => style("already exists").dim(),
            };
            print_above(bar, &format!("Directory {} {status}", path.display()));
        }
        SplitEvent::SectionWritten { path } => {
            print_above(bar, &created(path));
            if let Some(pb) = bar {
                pb.inc(1);
            }
        }
        SplitEvent::IndexWritten { path } => {
            if let Some(pb) = bar.take() {
                pb.finish_and_clear();
            }
            println!("{}", created(path));
        }
        SplitEvent::ManifestUpdated { path } => {
            println!("{} {}", path.display(), style("updated").green());
        }
        SplitEvent::SourceRemoved { path } => {
            println!("{} {}", path.display(), style("removed").red());
        }
    }
}

fn created(path: &Path) -> String {
    format!("{} {}", path.display(), style("created").green())
}

/// Print without tearing the progress bar; also prints when the bar is hidden.
fn print_above(bar: &Option<ProgressBar>, line: &str) {
    match bar {
        Some(pb) => pb.suspend(|| println!("{line}")),
        None => println!("{line}"),
    }
}

fn section_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} sections")
            .expect("valid template"),
    );
    pb
}
