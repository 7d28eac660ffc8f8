//! Timeline entry model.

use serde::{Deserialize, Serialize};

use super::Links;

/// Which side of the track an entry is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl Position {
    /// CSS class used for the entry's placement.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A single year on the history timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    /// May contain `{placeholder}` markers and inline markup.
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "posicao", default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl TimelineEntry {
    /// Heading text shown for this entry ("1970 - Title").
    pub fn heading(&self) -> String {
        format!("{} - {}", self.year, self.title)
    }

    /// Check whether a lowercased query occurs in the year, title or description.
    pub fn matches(&self, needle: &str) -> bool {
        self.year.to_string().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
