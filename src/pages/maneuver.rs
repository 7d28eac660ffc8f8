//! Maneuver detail page.

use tracing::error;

use crate::loader::Loader;
use crate::models::{find_maneuver, Maneuver};
use crate::render::{render_maneuver, render_maneuver_load_error, render_maneuver_not_found};
use crate::routes::maneuver_id_from_query;
use crate::view::html::nodes_to_html;
use crate::view::ViewNode;

/// How the page resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManeuverOutcome {
    Found,
    NotFound,
    LoadFailed,
}

/// Resolved content of the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ManeuverView {
    pub outcome: ManeuverOutcome,
    /// New document title; only set when a maneuver was found.
    pub document_title: Option<String>,
    pub content: Vec<ViewNode>,
}

impl ManeuverView {
    fn not_found() -> Self {
        Self {
            outcome: ManeuverOutcome::NotFound,
            document_title: None,
            content: render_maneuver_not_found(),
        }
    }

    fn load_failed() -> Self {
        Self {
            outcome: ManeuverOutcome::LoadFailed,
            document_title: None,
            content: render_maneuver_load_error(),
        }
    }

    pub fn to_html(&self) -> String {
        nodes_to_html(&self.content)
    }
}

/// Pick the maneuver for `id` and render it, or the not-found view.
pub fn resolve_maneuver(id: Option<&str>, maneuvers: &[Maneuver]) -> ManeuverView {
    let Some(maneuver) = id.and_then(|id| find_maneuver(maneuvers, id)) else {
        return ManeuverView::not_found();
    };
    ManeuverView {
        outcome: ManeuverOutcome::Found,
        document_title: Some(maneuver.name.clone()),
        content: render_maneuver(maneuver),
    }
}

/// Resolve the page for a query string such as `?id=kickflip`.
///
/// Without an `id` nothing is fetched.
pub async fn load_maneuver_page(query: &str, loader: &Loader) -> ManeuverView {
    let Some(id) = maneuver_id_from_query(query) else {
        return ManeuverView::not_found();
    };

    match loader.load_maneuvers().await {
        Ok(maneuvers) => resolve_maneuver(Some(&id), &maneuvers),
        Err(e) => {
            error!("Failed to load maneuver data: {}", e);
            ManeuverView::load_failed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn maneuvers() -> Vec<Maneuver> {
        vec![Maneuver {
            id: "kickflip".to_string(),
            name: "Kickflip".to_string(),
            creator: Some("Rodney Mullen".to_string()),
            description: "Giro do shape.".to_string(),
            video_url: Some("https://www.youtube.com/watch?v=abc123".to_string()),
        }]
    }

    #[test]
    fn test_found_sets_title() {
        let view = resolve_maneuver(Some("kickflip"), &maneuvers());
        assert_eq!(view.outcome, ManeuverOutcome::Found);
        assert_eq!(view.document_title.as_deref(), Some("Kickflip"));
        assert!(view.to_html().contains("https://www.youtube.com/embed/abc123"));
    }

    #[test]
    fn test_absent_and_unknown_ids() {
        let absent = resolve_maneuver(None, &maneuvers());
        let unknown = resolve_maneuver(Some("heelflip"), &maneuvers());
        assert_eq!(absent.outcome, ManeuverOutcome::NotFound);
        assert_eq!(absent, unknown);
        assert!(absent.document_title.is_none());
    }

    #[tokio::test]
    async fn test_missing_id_skips_fetch() {
        // Directory does not exist; a fetch would fail with LoadFailed
        let loader = Loader::directory("/nonexistent/skate-site");
        let view = load_maneuver_page("", &loader).await;
        assert_eq!(view.outcome, ManeuverOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_load_failure() {
        let loader = Loader::directory("/nonexistent/skate-site");
        let view = load_maneuver_page("?id=kickflip", &loader).await;
        assert_eq!(view.outcome, ManeuverOutcome::LoadFailed);
        assert!(view.to_html().starts_with("<h1>Erro ao carregar.</h1>"));
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("manobras.json"),
            serde_json::to_string(&maneuvers()).unwrap(),
        )
        .unwrap();
        let loader = Loader::directory(dir.path());
        let view = load_maneuver_page("?id=kickflip", &loader).await;
        assert_eq!(view.outcome, ManeuverOutcome::Found);
    }
}
