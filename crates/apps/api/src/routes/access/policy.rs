use app_state::AccessPolicyKind;
use http::StatusCode;
use http::request::Parts;
use std::sync::Arc;

/// Outcome of evaluating an [`AccessPolicy`] for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(StatusCode),
}

/// Decides, before any handler runs, whether a request may proceed.
///
/// The policy is built once at startup and shared by every request, so
/// implementations must not hold per-request state.
pub trait AccessPolicy: Send + Sync {
    fn check(&self, request: &Parts) -> AccessDecision;

    /// Whether state-changing requests must prove they came from a trusted origin.
    fn csrf_protection(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// Allows every request: no authentication, no CSRF verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermitAll;

impl AccessPolicy for PermitAll {
    fn check(&self, _request: &Parts) -> AccessDecision {
        AccessDecision::Allow
    }

    fn csrf_protection(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "permit_all"
    }
}

#[must_use]
pub fn build_access_policy(kind: AccessPolicyKind) -> Arc<dyn AccessPolicy> {
    match kind {
        AccessPolicyKind::PermitAll => Arc::new(PermitAll),
    }
}
