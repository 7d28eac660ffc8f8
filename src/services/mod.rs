//! Text and URL services shared by the page renderers.
//!
//! - `interpolate`: `{placeholder}` link substitution
//! - `youtube`: embed URL derivation for maneuver videos
//! - `validate`: dataset consistency checks

pub mod interpolate;
pub mod validate;
pub mod youtube;

pub use interpolate::interpolate;
pub use validate::{validate_article, validate_index, DatasetIssue};
pub use youtube::{embed_url, is_youtube_url};
