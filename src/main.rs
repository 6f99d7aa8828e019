//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; feed and screen behavior live in the use cases.

use dotenv::dotenv;
use movie_feed::adapters::fixtures::FixtureCatalog;
use movie_feed::adapters::persistence::FavoritesJson;
use movie_feed::adapters::tmdb::TmdbCatalog;
use movie_feed::adapters::ui::{ChannelNavigator, SpinnerObserver, TuiInputPort};
use movie_feed::ports::{
    FavoritePort, InputPort, MovieDetailPort, NavigatorPort, PopularMoviesPort,
    TrendingMoviesPort,
};
use movie_feed::shared::config::AppConfig;
use movie_feed::usecases::{FeedAggregator, MovieListService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// The three catalog capabilities, served by one adapter.
struct CatalogPorts {
    popular: Arc<dyn PopularMoviesPort>,
    trending: Arc<dyn TrendingMoviesPort>,
    details: Arc<dyn MovieDetailPort>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    movie_feed::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config invalid, using defaults");
        AppConfig::default()
    });

    // --- Favorites (JSON file under data dir) ---
    let data_path = PathBuf::from(cfg.data_dir_or_default());
    tokio::fs::create_dir_all(&data_path)
        .await
        .map_err(|e| anyhow::anyhow!("create data dir: {}", e))?;
    let favorites_path = data_path.join("favorites.json");
    let favorites_store = FavoritesJson::new(&favorites_path);
    favorites_store
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(path = %favorites_path.display(), "favorites store ready");
    let favorites: Arc<dyn FavoritePort> = Arc::new(favorites_store);

    // --- Catalog: TMDB when a key is configured, offline fixtures otherwise ---
    let catalog = build_catalog(&cfg, Arc::clone(&favorites))?;

    // --- Navigation: intents flow to the TUI over a channel ---
    let (nav_tx, nav_rx) = mpsc::unbounded_channel();
    let navigator: Arc<dyn NavigatorPort> = Arc::new(ChannelNavigator::new(nav_tx));

    // --- Services ---
    let spinner = Arc::new(SpinnerObserver::new());
    let feed = Arc::new(
        FeedAggregator::new(catalog.popular, catalog.trending, Arc::clone(&favorites))
            .with_observer(spinner.clone()),
    );
    let list = Arc::new(MovieListService::new(feed, Arc::clone(&navigator)));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        list,
        catalog.details,
        favorites,
        navigator,
        nav_rx,
        spinner,
    ));

    // --- Run (list screen -> detail screen / search) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

fn build_catalog(cfg: &AppConfig, favorites: Arc<dyn FavoritePort>) -> anyhow::Result<CatalogPorts> {
    if let Some(api_key) = cfg.tmdb_api_key() {
        info!(
            url = %cfg.tmdb_api_url_or_default(),
            language = %cfg.language_or_default(),
            "TMDB catalog enabled"
        );
        let tmdb = Arc::new(
            TmdbCatalog::new(
                cfg.tmdb_api_url_or_default(),
                api_key,
                cfg.language_or_default(),
                Duration::from_secs(cfg.request_timeout_secs_or_default()),
                favorites,
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        );
        Ok(CatalogPorts {
            popular: tmdb.clone(),
            trending: tmdb.clone(),
            details: tmdb,
        })
    } else {
        warn!("TMDB_API_KEY not set, using offline fixture catalog");
        let fixtures = Arc::new(FixtureCatalog::with_delay(
            favorites,
            cfg.fixture_delay_ms_or_default(),
        ));
        Ok(CatalogPorts {
            popular: fixtures.clone(),
            trending: fixtures.clone(),
            details: fixtures,
        })
    }
}
