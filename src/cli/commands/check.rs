//! Dataset check command.

use anyhow::Context;
use console::style;

use skate_history::config::Settings;
use skate_history::loader::Loader;
use skate_history::services::{validate_article, validate_index, DatasetIssue};

use crate::cli::icons::{error, success};

fn report(label: &str, issues: &[DatasetIssue]) {
    if issues.is_empty() {
        println!("{} {}", success(), label);
        return;
    }
    println!("{} {} ({} issues)", error(), label, issues.len());
    for issue in issues {
        tracing::warn!("{}: {}", label, issue);
        println!("  {} {}", style("-").dim(), issue);
    }
}

/// Load every dataset and report consistency problems.
pub async fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let loader = Loader::from_settings(settings)?;
    let resources = loader.resources().clone();

    let index = loader.load_index().await.with_context(|| {
        format!(
            "Failed to load {} / {}",
            resources.timeline, resources.maneuvers
        )
    })?;
    let article = loader
        .load_article()
        .await
        .with_context(|| format!("Failed to load {}", resources.article))?;

    println!(
        "Loaded {} timeline entries, {} maneuvers, {} article blocks",
        index.timeline.len(),
        index.maneuvers.len(),
        article.len()
    );

    let index_issues = validate_index(&index);
    let article_issues = validate_article(&article);
    report("timeline and maneuvers", &index_issues);
    report("article", &article_issues);

    let total = index_issues.len() + article_issues.len();
    if total > 0 {
        anyhow::bail!("{} dataset issue(s) found", total);
    }
    Ok(())
}
