//! xdoc splitter - break a multi-section xdoc page into one page per section.
//!
//! Given `config_naming.xml` with one `<section>` per check, the splitter
//! writes `checks/naming/<check>.xml` for every section, rewrites relative
//! links so they still resolve from the new location, generates
//! `checks/naming/index.xml` from the descriptions in `checks.xml`, replaces
//! the `Naming` entry of `../site/site.xml` with a collapsible menu of the new
//! pages and finally removes the source file.
//!
//! # Example
//!
//! ```
//! use xdoc_splitter::types::LinkTarget;
//!
//! assert_eq!(LinkTarget::classify("#Properties"), LinkTarget::Preserved);
//! assert_eq!(
//!     LinkTarget::classify("config_misc.html#TodoComment"),
//!     LinkTarget::Local { stem: "config_misc", fragment: "#TodoComment" }
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Fixed file locations, constants and validation
//! - [`types`]: Sections, anchors, index rows and run options
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML helpers and the page wrapper
//! - [`source`]: Loading the input and finding sections
//! - [`links`]: Document index and link rewriting
//! - [`splitter`]: Rendering one page per section
//! - [`index`]: The generated overview page
//! - [`navigation`]: Site manifest patching
//! - [`writer`]: File output
//! - [`pipeline`]: The full run
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod links;
pub mod navigation;
pub mod pipeline;
pub mod source;
pub mod splitter;
pub mod types;
pub mod writer;
pub mod xml;

pub use pipeline::{run, SplitEvent, SplitReport};

pub use error::{Result, SplitterError};
pub use types::{Anchor, IndexRow, LinkTarget, Section, SplitOptions};
