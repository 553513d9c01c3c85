//! XML helpers: tree navigation, escaping and the xdoc page wrapper.

mod document;
mod utils;

pub use document::{escape_attribute, escape_text, wrap_in_document};
pub use utils::{descendants_named, element_children, get_tag_name, has_tag};
