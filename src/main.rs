use std::io::Write;

use cricket_viewer::config_handler;
use cricket_viewer::page::Page;
use cricket_viewer::rest_client::RestClient;
use cricket_viewer::viewer::MatchViewer;
use cricket_viewer::LogResult;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = config_handler::get_config()?;

    let page = Page::standard().into_safe();
    let viewer = MatchViewer::new(RestClient::new(&config), page.clone());
    viewer.on_ready().await;

    let document = page.read().await.render_document();
    info!("[HOST] Rendered document, {} bytes", document.len());
    std::io::stdout().write_all(document.as_bytes())
        .ok_log("[HOST] Failed to write document");
    Ok(())
}
