use crate::access::policy::{AccessDecision, AccessPolicy};
use axum::body::Body;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::Request;
use std::sync::Arc;
use tracing::{debug, warn};

/// Applies the configured [`AccessPolicy`] to every request.
pub async fn enforce_access_policy(
    State(policy): State<Arc<dyn AccessPolicy>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();
    let decision = policy.check(&parts);
    debug!(
        policy = policy.name(),
        method = %parts.method,
        path = %parts.uri.path(),
        ?decision,
        "Access decision"
    );

    match decision {
        AccessDecision::Allow => next.run(Request::from_parts(parts, body)).await,
        AccessDecision::Deny(status) => {
            warn!("{} denied {} {}", policy.name(), parts.method, parts.uri);
            status.into_response()
        }
    }
}
