//! Dataset consistency checks.
//!
//! None of these stop a page from loading; they surface authoring mistakes
//! that would otherwise show up as literal `{placeholders}` or misordered
//! timeline items.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ArticleBlock, IndexData, Links};
use crate::services::youtube::{embed_url, is_youtube_url};

/// A problem found in one of the datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// Two maneuvers share an identifier; only the first is reachable.
    DuplicateManeuver { id: String },
    /// Timeline entry is earlier than the one before it.
    UnsortedTimeline { index: usize, year: i32, previous: i32 },
    /// Text references a placeholder with no mapping.
    UnresolvedPlaceholder { location: String, key: String },
    /// A mapping is never referenced by its text.
    UnusedLink { location: String, key: String },
    /// Article block renders nothing.
    EmptyArticleBlock { index: usize },
    /// Maneuver video URL yields no embedded player.
    UnembeddableVideo {
        id: String,
        url: String,
        youtube: bool,
    },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateManeuver { id } => write!(f, "duplicate maneuver id '{}'", id),
            Self::UnsortedTimeline {
                index,
                year,
                previous,
            } => write!(
                f,
                "timeline entry #{} ({}) comes after {}",
                index, year, previous
            ),
            Self::UnresolvedPlaceholder { location, key } => {
                write!(f, "{}: placeholder {{{}}} has no link", location, key)
            }
            Self::UnusedLink { location, key } => {
                write!(f, "{}: link '{}' is never referenced", location, key)
            }
            Self::EmptyArticleBlock { index } => write!(f, "article block #{} is empty", index),
            Self::UnembeddableVideo { id, url, youtube } => {
                let reason = if *youtube {
                    "use a youtube.com watch URL with a v parameter"
                } else {
                    "not a YouTube link"
                };
                write!(f, "maneuver '{}': video {} has no player ({})", id, url, reason)
            }
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^{}\s]+)\}").expect("valid placeholder regex"))
}

/// Placeholder names referenced by `text`, in order of first appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

fn check_links(location: &str, text: &str, links: Option<&Links>, issues: &mut Vec<DatasetIssue>) {
    let referenced = placeholders(text);
    for key in &referenced {
        if !links.is_some_and(|l| l.contains_key(key)) {
            issues.push(DatasetIssue::UnresolvedPlaceholder {
                location: location.to_string(),
                key: key.clone(),
            });
        }
    }
    if let Some(links) = links {
        for key in links.keys() {
            if !text.contains(&format!("{{{}}}", key)) {
                issues.push(DatasetIssue::UnusedLink {
                    location: location.to_string(),
                    key: key.clone(),
                });
            }
        }
    }
}

/// Check the timeline and maneuver datasets.
pub fn validate_index(data: &IndexData) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();

    let mut ids = HashSet::new();
    for maneuver in &data.maneuvers {
        if !ids.insert(maneuver.id.as_str()) {
            issues.push(DatasetIssue::DuplicateManeuver {
                id: maneuver.id.clone(),
            });
        }
    }

    for maneuver in &data.maneuvers {
        let Some(url) = maneuver.video_url.as_deref() else {
            continue;
        };
        if embed_url(url).is_none() {
            issues.push(DatasetIssue::UnembeddableVideo {
                id: maneuver.id.clone(),
                url: url.to_string(),
                youtube: is_youtube_url(url),
            });
        }
    }

    for (index, pair) in data.timeline.windows(2).enumerate() {
        if pair[1].year < pair[0].year {
            issues.push(DatasetIssue::UnsortedTimeline {
                index: index + 1,
                year: pair[1].year,
                previous: pair[0].year,
            });
        }
    }

    for entry in &data.timeline {
        let location = format!("timeline {}", entry.year);
        check_links(&location, &entry.description, entry.links.as_ref(), &mut issues);
    }

    issues
}

/// Check the article dataset.
pub fn validate_article(blocks: &[ArticleBlock]) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        if block.is_empty() {
            issues.push(DatasetIssue::EmptyArticleBlock { index });
            continue;
        }
        if let Some(paragraph) = &block.paragraph {
            let location = format!("article block #{}", index);
            check_links(&location, paragraph, block.links.as_ref(), &mut issues);
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Maneuver, Position, TimelineEntry};

    fn entry(year: i32, description: &str, links: &[(&str, &str)]) -> TimelineEntry {
        TimelineEntry {
            year,
            title: format!("Ano {}", year),
            description: description.to_string(),
            position: Position::Left,
            links: if links.is_empty() {
                None
            } else {
                Some(
                    links
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                )
            },
        }
    }

    fn maneuver(id: &str) -> Maneuver {
        Maneuver {
            id: id.to_string(),
            name: id.to_string(),
            creator: None,
            description: String::new(),
            video_url: None,
        }
    }

    #[test]
    fn test_placeholders_dedup_in_order() {
        assert_eq!(placeholders("{b} {a} {b} { c }"), vec!["b", "a"]);
    }

    #[test]
    fn test_clean_dataset() {
        let data = IndexData::new(
            vec![entry(1950, "ok", &[]), entry(1970, "{u}", &[("u", "x")])],
            vec![maneuver("ollie"), maneuver("kickflip")],
        );
        assert!(validate_index(&data).is_empty());
    }

    #[test]
    fn test_reports_each_kind() {
        let data = IndexData::new(
            vec![
                entry(1970, "{missing}", &[("unused", "x")]),
                entry(1960, "ok", &[]),
            ],
            vec![maneuver("ollie"), maneuver("ollie")],
        );
        let issues = validate_index(&data);
        assert!(issues.contains(&DatasetIssue::DuplicateManeuver {
            id: "ollie".to_string()
        }));
        assert!(issues.contains(&DatasetIssue::UnsortedTimeline {
            index: 1,
            year: 1960,
            previous: 1970
        }));
        assert!(issues.iter().any(
            |i| matches!(i, DatasetIssue::UnresolvedPlaceholder { key, .. } if key == "missing")
        ));
        assert!(issues
            .iter()
            .any(|i| matches!(i, DatasetIssue::UnusedLink { key, .. } if key == "unused")));
    }

    #[test]
    fn test_placeholder_keys_outside_ascii() {
        let data = IndexData::new(
            vec![
                entry(1950, "Na {link_calçada}.", &[("link_calçada", "<a>x</a>")]),
                entry(1960, "Ver {link.x}.", &[]),
            ],
            vec![],
        );
        assert_eq!(
            validate_index(&data),
            vec![DatasetIssue::UnresolvedPlaceholder {
                location: "timeline 1960".to_string(),
                key: "link.x".to_string()
            }]
        );
    }

    #[test]
    fn test_unembeddable_videos() {
        let mut short = maneuver("ollie");
        short.video_url = Some("https://youtu.be/abc123".to_string());
        let mut other = maneuver("kickflip");
        other.video_url = Some("https://vimeo.com/123".to_string());
        let mut good = maneuver("heelflip");
        good.video_url = Some("https://www.youtube.com/watch?v=abc123".to_string());

        let issues = validate_index(&IndexData::new(vec![], vec![short, other, good]));
        assert_eq!(
            issues,
            vec![
                DatasetIssue::UnembeddableVideo {
                    id: "ollie".to_string(),
                    url: "https://youtu.be/abc123".to_string(),
                    youtube: true
                },
                DatasetIssue::UnembeddableVideo {
                    id: "kickflip".to_string(),
                    url: "https://vimeo.com/123".to_string(),
                    youtube: false
                },
            ]
        );
    }

    #[test]
    fn test_article_empty_block() {
        let blocks = vec![ArticleBlock::default()];
        assert_eq!(
            validate_article(&blocks),
            vec![DatasetIssue::EmptyArticleBlock { index: 0 }]
        );
    }
}
