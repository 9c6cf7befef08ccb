mod catalog;
mod config;
mod detail;
mod listing;
mod loading;
mod models;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use detail::{DetailView, HttpSource, PropertySource, StaticSource};
use listing::ListingState;
use loading::{LoadingGate, SKELETON_COUNT};
use models::ListingSnapshot;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    config.validate()?;

    info!("🏠 Estate Listings");
    info!("==================");

    let source: Arc<dyn PropertySource> = match &config.api_base {
        Some(base) => Arc::new(HttpSource::new(base, config.timeout())?),
        None => Arc::new(StaticSource::sample(config.detail_delay())),
    };
    info!("Using {} property source", source.source_name());

    // Listing view: skeletons until the delay elapses
    let mut gate = LoadingGate::start(config.listing_delay());

    let properties = source.list().await.context("Failed to load listings")?;
    let snapshot = ListingSnapshot::new(properties);
    if snapshot.is_empty() {
        warn!("Listing source returned no properties");
    }
    info!("Loaded {} properties at {}", snapshot.len(), snapshot.loaded_at.to_rfc3339());

    let mut state = ListingState::new(snapshot, config.page_size);
    state.set_filter(config.filter);
    if config.page != 1 && !state.set_page(config.page) {
        warn!(
            "Page {} is out of range for {} ({} pages), showing page 1",
            config.page,
            state.filter(),
            state.total_pages()
        );
    }

    info!("Showing page {} of {}", state.page(), state.total_pages());

    print!("{}", render::listing(&state, gate.is_loading(), SKELETON_COUNT));
    gate.ready().await;
    println!();
    print!("{}", render::listing(&state, gate.is_loading(), SKELETON_COUNT));

    // Detail view
    if let Some(id) = config.property.clone() {
        let mut view = DetailView::new(Arc::clone(&source));
        view.navigate(id);

        println!();
        print!("{}", render::detail(&view.state()));
        let resolved = view.settled().await;
        println!();
        print!("{}", render::detail(&resolved));
    }

    Ok(())
}
