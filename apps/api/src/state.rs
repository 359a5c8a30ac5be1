use std::sync::Arc;

use crate::auth::IdentityService;
use crate::resumes::store::ResumeStore;
use crate::tailoring::service::TailorService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every collaborator is a handle passed in at startup; handlers never reach
/// for global clients.
#[derive(Clone)]
pub struct AppState {
    /// Session lookups for the Authorization Gate.
    pub identity: Arc<dyn IdentityService>,
    pub tailor: TailorService,
    pub resumes: Arc<dyn ResumeStore>,
}
