//! Data-to-view renderers.
//!
//! Every function here is pure: the same input always produces the same tree,
//! and callers replace a container's children wholesale with the result.

mod article;
mod maneuver;
pub mod messages;
mod search_result;
mod timeline;

pub use article::{render_article, render_article_block};
pub use maneuver::{render_maneuver, render_maneuver_not_found, render_maneuver_load_error};
pub use search_result::render_search_result;
pub use timeline::{render_timeline, render_timeline_item};

use crate::view::{Element, ViewNode};

/// A paragraph holding a fixed message, used for load failures.
pub fn render_message(message: &str) -> ViewNode {
    Element::new("p").text(message).into()
}
