use metrics_exporter_prometheus::PrometheusHandle;
use mindwell::config::ModelConfig;
use mindwell::screening::{load_classifier, ModelSource, ScreeningService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the classifier artifacts once and wrap them in the shared service.
pub(crate) fn build_screening_service(config: &ModelConfig) -> (Arc<ScreeningService>, ModelSource) {
    let loaded = load_classifier(config);
    let source = loaded.source;
    (Arc::new(ScreeningService::from_loaded(loaded)), source)
}
