use crate::assessment::service::AssessmentService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing is shared between requests beyond this.
#[derive(Clone)]
pub struct AppState {
    pub assessor: AssessmentService,
    pub config: Config,
}
