use crate::access::policy::AccessPolicy;
use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::database::record_store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub store: Arc<dyn RecordStore>,
    pub access_policy: Arc<dyn AccessPolicy>,
}

// Lets the access middleware extract only the policy from the context.
impl FromRef<ApiContext> for Arc<dyn AccessPolicy> {
    fn from_ref(state: &ApiContext) -> Self {
        state.access_policy.clone()
    }
}
