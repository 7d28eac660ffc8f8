//! Web server command.

use skate_history::config::Settings;
use skate_history::server::{parse_bind_address, serve};

use crate::cli::icons::arrow;

/// Start the static file server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind);

    if !settings.site_dir.is_dir() {
        anyhow::bail!(
            "Site directory not found: {}",
            settings.site_dir.display()
        );
    }

    println!(
        "{} Serving {} at http://{}:{}",
        arrow(),
        settings.site_dir.display(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    serve(&settings.site_dir, &host, port).await
}
