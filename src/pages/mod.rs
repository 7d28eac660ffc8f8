//! Page controllers.
//!
//! Each page loads its data once, renders through [`crate::render`], and
//! turns every failure into a visible fallback rather than an error.

mod article;
mod index;
mod maneuver;

pub use article::{load_article_page, ArticleView};
pub use index::{IndexPage, PageEffect};
pub use maneuver::{load_maneuver_page, resolve_maneuver, ManeuverOutcome, ManeuverView};
