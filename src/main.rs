use anyhow::{Context, Result, anyhow};
use chrono::{Days, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tourhub::{
    CancelToken, Coordinates, EventWindow, JsonView, TextGrid, TourApiClient, TourHubConfig,
    TourPipeline, TourQuery, TourView, TraceMap, deliver, plot_items,
};

/// One load cycle: resolve counts, fetch all pages of the festival search
/// and the area-based list, intersect, deliver, plot markers.
#[tokio::main]
async fn main() -> Result<()> {
    let config = TourHubConfig::load().context("Failed to load configuration")?;
    init_logging(&config);
    info!(version = tourhub::VERSION, "starting tour load cycle");

    let client = TourApiClient::new(&config)?;
    let pipeline =
        TourPipeline::new(client).with_fetch_concurrency(config.api.fetch_concurrency as usize);
    let cancel = CancelToken::new();

    let today = Utc::now().date_naive();
    let window_end = today
        .checked_add_days(Days::new(config.defaults.event_window_days.into()))
        .context("Event window end is out of calendar range")?;
    let window = EventWindow::new(today, window_end)?;

    let defaults = &config.defaults;
    let mut primary =
        TourQuery::festival_search(defaults.content_type_id, defaults.area_code, window);
    primary.cat1 = defaults.cat1.clone();
    primary.cat2 = defaults.cat2.clone();
    primary.cat3 = defaults.cat3.clone();

    let mut secondary = TourQuery::area_based(defaults.content_type_id, defaults.area_code);
    secondary.cat1 = defaults.cat1.clone();
    secondary.cat2 = defaults.cat2.clone();
    secondary.cat3 = defaults.cat3.clone();

    let outcome = pipeline.run(&primary, &secondary, &cancel).await;

    let mut view: Box<dyn TourView> = match defaults.output_format.as_str() {
        "json" => Box::new(JsonView),
        _ => Box::new(TextGrid),
    };
    deliver(view.as_mut(), &outcome);

    let items = outcome.map_err(|e| anyhow!(e.user_message()))?;

    let mut map = TraceMap::default();
    let center = Coordinates {
        latitude: config.map.center_latitude,
        longitude: config.map.center_longitude,
    };
    let plotted = plot_items(&mut map, &items, center, config.map.zoom_level);
    info!(
        delivered = items.len(),
        plotted, "load cycle complete"
    );

    Ok(())
}

fn init_logging(config: &TourHubConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
