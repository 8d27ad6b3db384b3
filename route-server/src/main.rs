use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use route_server::cache::{CacheConfig, CachedGeoapifyClient};
use route_server::catalog::StationCatalog;
use route_server::geoapify::{GeoapifyClient, GeoapifyConfig};
use route_server::planner::PlanConfig;
use route_server::web::{AppState, create_router};

/// Default path for the imported station catalog.
const DEFAULT_STATIONS_CSV: &str = "fuel_stations_with_lat_lon.csv";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("GEOAPIFY_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: GEOAPIFY_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create Geoapify client
    let geoapify_config = GeoapifyConfig::new(&api_key);
    let geoapify_client =
        GeoapifyClient::new(geoapify_config).expect("Failed to create Geoapify client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_geoapify = CachedGeoapifyClient::new(geoapify_client, &cache_config);

    // Load the station catalog (fail fast if unavailable)
    let csv_path =
        std::env::var("STATIONS_CSV").unwrap_or_else(|_| DEFAULT_STATIONS_CSV.to_string());
    println!("Loading station catalog from {csv_path}...");
    let catalog =
        StationCatalog::from_csv_path(&csv_path).expect("Failed to load station catalog");
    println!("Loaded {} fuel stations", catalog.len());

    // Planner configuration
    let plan_config = PlanConfig::default();

    // Build app state
    let state = AppState::new(cached_geoapify, catalog, plan_config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Fuel-Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health     - Health check");
    println!("  GET  /trip/plan  - Plan a trip (?start=...&end=...)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
