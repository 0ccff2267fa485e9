use campus_placement::config::PlacementConfig;
use campus_placement::error::AppError;
use campus_placement::workflows::placement::{InMemoryPlacementStore, PlacementServices};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Services = PlacementServices<InMemoryPlacementStore>;

/// Placement services over a fresh in-memory store with the question bank seeded.
pub(crate) fn in_memory_services(config: &PlacementConfig) -> Result<Arc<Services>, AppError> {
    let store = Arc::new(InMemoryPlacementStore::default());
    let services = PlacementServices::new(store, config);
    services.assessment.seed_standard_bank()?;
    Ok(Arc::new(services))
}
