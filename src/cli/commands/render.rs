//! Render commands: print page content as HTML.

use console::style;

use skate_history::config::Settings;
use skate_history::loader::Loader;
use skate_history::pages::{load_article_page, load_maneuver_page, IndexPage};

/// Print the timeline container's content.
pub async fn cmd_render_timeline(settings: &Settings) -> anyhow::Result<()> {
    let loader = Loader::from_settings(settings)?;
    let page = IndexPage::load(&loader, settings.layout).await;
    println!("{}", page.timeline_html());
    Ok(())
}

/// Print the article container's content.
pub async fn cmd_render_article(settings: &Settings) -> anyhow::Result<()> {
    let loader = Loader::from_settings(settings)?;
    let view = load_article_page(&loader).await;
    println!("{}", view.to_html());
    Ok(())
}

/// Print the maneuver page's content for an id.
pub async fn cmd_render_maneuver(settings: &Settings, id: Option<&str>) -> anyhow::Result<()> {
    let loader = Loader::from_settings(settings)?;
    let query = id
        .map(|id| format!("?id={}", urlencoding::encode(id)))
        .unwrap_or_default();
    let view = load_maneuver_page(&query, &loader).await;

    if let Some(title) = &view.document_title {
        eprintln!("{} {}", style("title:").dim(), title);
    }
    println!("{}", view.to_html());
    Ok(())
}
