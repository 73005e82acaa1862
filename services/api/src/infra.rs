use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use strategic_value::decision::{
    ScenarioCatalog, ScoringConfig, StrategicDecisionService, WeightStore,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire a decision service with the default weight set and seeded catalog.
pub(crate) fn decision_service(scoring: ScoringConfig) -> Arc<StrategicDecisionService> {
    Arc::new(StrategicDecisionService::new(
        Arc::new(WeightStore::default()),
        scoring,
        ScenarioCatalog::seeded(),
    ))
}
