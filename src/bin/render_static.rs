// Static Export
//
// Purpose: Render the portfolio page to OUT_DIR/index.html for static hosting
// Usage: OUT_DIR=dist cargo run --bin render_static

use anyhow::Context;
use portfolio_site::{render_home, PortfolioContent, SiteConfig};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = std::env::var("OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("dist"));

    let content = match std::env::var("CONTENT_PATH") {
        Ok(path) => PortfolioContent::load(path.as_ref())?,
        Err(_) => PortfolioContent::default(),
    };
    let config = match std::env::var("SITE_CONFIG") {
        Ok(path) => SiteConfig::load(path.as_ref())?,
        Err(_) => SiteConfig::default(),
    };

    let html = render_home(&content, &config)?;

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {:?}", out_dir))?;
    let index = out_dir.join("index.html");
    fs::write(&index, &html).with_context(|| format!("Failed to write {:?}", index))?;

    tracing::info!("Wrote {} ({} bytes)", index.display(), html.len());
    Ok(())
}
