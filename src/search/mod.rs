//! Search box dispatch.
//!
//! A query is trimmed and lowercased, then matched in priority order:
//! 1. exact maneuver identifier → maneuver page
//! 2. the reserved article keyword → article page
//! 3. first timeline entry containing the query → inline result
//!
//! Anything else is reported as not found.

use crate::models::{IndexData, TimelineEntry};
use crate::routes::Route;

/// Query that opens the skate terapia article.
pub const ARTICLE_KEYWORD: &str = "skate terapia";

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction<'a> {
    /// Empty query; do nothing.
    Ignore,
    /// Go to another page.
    Navigate(Route),
    /// Show a timeline entry inline.
    ShowEntry(&'a TimelineEntry),
    /// Nothing matched.
    NotFound,
}

/// Normalize a raw query the way the search box does.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Matches queries against the loaded datasets.
#[derive(Debug, Clone, Copy)]
pub struct SearchDispatcher<'a> {
    data: &'a IndexData,
}

impl<'a> SearchDispatcher<'a> {
    pub fn new(data: &'a IndexData) -> Self {
        Self { data }
    }

    pub fn dispatch(&self, query: &str) -> SearchAction<'a> {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return SearchAction::Ignore;
        }

        if let Some(maneuver) = self.data.maneuver(&needle) {
            return SearchAction::Navigate(Route::Maneuver(maneuver.id.clone()));
        }

        if needle == ARTICLE_KEYWORD {
            return SearchAction::Navigate(Route::Article);
        }

        match self.data.timeline.iter().find(|entry| entry.matches(&needle)) {
            Some(entry) => SearchAction::ShowEntry(entry),
            None => SearchAction::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Maneuver, Position};

    fn data() -> IndexData {
        IndexData::new(
            vec![
                TimelineEntry {
                    year: 1950,
                    title: "Origem".to_string(),
                    description: "Surfistas da Califórnia".to_string(),
                    position: Position::Left,
                    links: None,
                },
                TimelineEntry {
                    year: 1970,
                    title: "Uretano".to_string(),
                    description: "Rodas de {u} mudam tudo.".to_string(),
                    position: Position::Right,
                    links: None,
                },
                TimelineEntry {
                    year: 1978,
                    title: "Ollie".to_string(),
                    description: "Alan Gelfand inventa o salto.".to_string(),
                    position: Position::Left,
                    links: None,
                },
            ],
            vec![
                Maneuver {
                    id: "kickflip".to_string(),
                    name: "Kickflip".to_string(),
                    creator: None,
                    description: String::new(),
                    video_url: None,
                },
                Maneuver {
                    id: "ollie".to_string(),
                    name: "Ollie".to_string(),
                    creator: None,
                    description: String::new(),
                    video_url: None,
                },
            ],
        )
    }

    #[test]
    fn test_empty_query_ignored() {
        let data = data();
        let search = SearchDispatcher::new(&data);
        assert_eq!(search.dispatch(""), SearchAction::Ignore);
        assert_eq!(search.dispatch("   "), SearchAction::Ignore);
    }

    #[test]
    fn test_maneuver_id() {
        let data = data();
        let search = SearchDispatcher::new(&data);
        match search.dispatch("  KickFlip ") {
            SearchAction::Navigate(route) => assert_eq!(route.href(), "manobra.html?id=kickflip"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_maneuver_beats_timeline() {
        // "ollie" is also a timeline title
        let data = data();
        let search = SearchDispatcher::new(&data);
        assert_eq!(
            search.dispatch("ollie"),
            SearchAction::Navigate(Route::Maneuver("ollie".to_string()))
        );
    }

    #[test]
    fn test_article_keyword() {
        let data = data();
        let search = SearchDispatcher::new(&data);
        match search.dispatch("Skate Terapia") {
            SearchAction::Navigate(route) => assert_eq!(route.href(), "skate-terapia.html"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_timeline_year_title_description() {
        let data = data();
        let search = SearchDispatcher::new(&data);
        assert!(matches!(search.dispatch("1970"), SearchAction::ShowEntry(e) if e.year == 1970));
        assert!(matches!(search.dispatch("URETANO"), SearchAction::ShowEntry(e) if e.year == 1970));
        assert!(matches!(search.dispatch("gelfand"), SearchAction::ShowEntry(e) if e.year == 1978));
    }

    #[test]
    fn test_first_match_wins() {
        let data = data();
        let search = SearchDispatcher::new(&data);
        // "197" is in both 1970 and 1978
        assert!(matches!(search.dispatch("197"), SearchAction::ShowEntry(e) if e.year == 1970));
    }

    #[test]
    fn test_not_found() {
        let data = data();
        let search = SearchDispatcher::new(&data);
        assert_eq!(search.dispatch("xyzzy"), SearchAction::NotFound);
    }
}
