//! Static page addresses within the site.

use std::fmt;

/// The timeline page.
pub const INDEX_PAGE: &str = "index.html";
/// Maneuver detail page; takes an `id` query parameter.
pub const MANEUVER_PAGE: &str = "manobra.html";
/// The skate terapia article.
pub const ARTICLE_PAGE: &str = "skate-terapia.html";

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Maneuver(String),
    Article,
}

impl Route {
    /// Relative link to the page.
    pub fn href(&self) -> String {
        match self {
            Self::Index => INDEX_PAGE.to_string(),
            Self::Maneuver(id) => format!("{}?id={}", MANEUVER_PAGE, urlencoding::encode(id)),
            Self::Article => ARTICLE_PAGE.to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Read the `id` parameter from a query string (with or without leading `?`).
///
/// Empty values count as absent.
pub fn maneuver_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}
