//! Data models for the skate history site.

mod article;
mod maneuver;
mod timeline;

pub use article::{ArticleBlock, ArticleImage};
pub use maneuver::Maneuver;
pub use timeline::{Position, TimelineEntry};

use std::collections::BTreeMap;

/// Placeholder name to replacement (URL or HTML fragment).
///
/// Ordered so substitution order never depends on hash iteration.
pub type Links = BTreeMap<String, String>;

/// Everything the timeline page needs, loaded together.
#[derive(Debug, Clone, Default)]
pub struct IndexData {
    pub timeline: Vec<TimelineEntry>,
    pub maneuvers: Vec<Maneuver>,
}

impl IndexData {
    pub fn new(timeline: Vec<TimelineEntry>, maneuvers: Vec<Maneuver>) -> Self {
        Self {
            timeline,
            maneuvers,
        }
    }

    /// Look up a maneuver by identifier (first match wins).
    pub fn maneuver(&self, id: &str) -> Option<&Maneuver> {
        find_maneuver(&self.maneuvers, id)
    }
}

/// Find a maneuver by exact identifier.
pub fn find_maneuver<'a>(maneuvers: &'a [Maneuver], id: &str) -> Option<&'a Maneuver> {
    maneuvers.iter().find(|m| m.id == id)
}
