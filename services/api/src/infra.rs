use bmed_eval::config::EvaluationConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) evaluation: Arc<EvaluationConfig>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle, evaluation: EvaluationConfig) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            evaluation: Arc::new(evaluation),
        }
    }
}
