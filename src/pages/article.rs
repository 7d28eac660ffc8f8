//! Skate terapia article page.

use tracing::error;

use crate::loader::Loader;
use crate::render::{messages, render_article, render_message};
use crate::view::html::nodes_to_html;
use crate::view::ViewNode;

/// Content of the article container.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub loaded: bool,
    pub content: Vec<ViewNode>,
}

impl ArticleView {
    pub fn to_html(&self) -> String {
        nodes_to_html(&self.content)
    }
}

/// Load the article blocks and render them, or the error message.
pub async fn load_article_page(loader: &Loader) -> ArticleView {
    match loader.load_article().await {
        Ok(blocks) => ArticleView {
            loaded: true,
            content: render_article(&blocks),
        },
        Err(e) => {
            error!("Failed to load article: {}", e);
            ArticleView {
                loaded: false,
                content: vec![render_message(messages::ARTICLE_LOAD_ERROR)],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_article_renders_sections() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("skate-terapia-data.json"),
            r#"[{"titulo": "O projeto"}, {"paragrafo": "Texto."}]"#,
        )
        .unwrap();
        let view = load_article_page(&Loader::directory(dir.path())).await;
        assert!(view.loaded);
        assert_eq!(view.content.len(), 2);
    }

    #[tokio::test]
    async fn test_article_error_message() {
        let dir = tempdir().unwrap();
        let view = load_article_page(&Loader::directory(dir.path())).await;
        assert!(!view.loaded);
        assert_eq!(
            view.to_html(),
            format!("<p>{}</p>", messages::ARTICLE_LOAD_ERROR)
        );
    }
}
