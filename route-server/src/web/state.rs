//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeoapifyClient;
use crate::catalog::StationCatalog;
use crate::planner::PlanConfig;

/// Shared application state.
///
/// Contains everything needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached Geoapify client (geocoding and routing)
    pub geoapify: Arc<CachedGeoapifyClient>,

    /// Imported fuel station catalog
    pub catalog: Arc<StationCatalog>,

    /// Planner configuration
    pub config: Arc<PlanConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(geoapify: CachedGeoapifyClient, catalog: StationCatalog, config: PlanConfig) -> Self {
        Self {
            geoapify: Arc::new(geoapify),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
