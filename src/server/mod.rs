//! Static file server for the site.
//!
//! Serves the site directory as-is (page shells, stylesheets and the JSON
//! datasets) so the pages and the remote data source can be used over HTTP.

mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::Path;

/// Start the web server.
pub async fn serve(site_dir: &Path, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(site_dir);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Serving {} at http://{}", site_dir.display(), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> 127.0.0.1:3030
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3030
/// - Host and port: "0.0.0.0:3030" -> 0.0.0.0:3030
pub fn parse_bind_address(bind: &str) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return ("127.0.0.1".to_string(), port);
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    (bind.to_string(), 3030)
}
