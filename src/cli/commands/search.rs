//! Search command.

use anyhow::Context;
use console::style;

use skate_history::config::Settings;
use skate_history::loader::Loader;
use skate_history::pages::{IndexPage, PageEffect};
use skate_history::view::to_html;

use crate::cli::icons::{arrow, warning};

/// Run a query through the timeline page's search.
pub async fn cmd_search(settings: &Settings, query: &str) -> anyhow::Result<()> {
    let loader = Loader::from_settings(settings)?;
    let data = loader
        .load_index()
        .await
        .context("Failed to load timeline data")?;
    let mut page = IndexPage::from_data(data, settings.layout);

    match page.search(query) {
        PageEffect::Navigate(route) => {
            println!("{} {}", arrow(), style(route.href()).bold());
        }
        PageEffect::Alert(message) => {
            eprintln!("{} {}", warning(), message);
        }
        PageEffect::None | PageEffect::ScrollToTop => match page.search_result() {
            Some(result) => println!("{}", to_html(&result.clone().into())),
            None => eprintln!("{} Empty query", warning()),
        },
    }

    Ok(())
}
