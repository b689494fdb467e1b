use crate::api_state::ApiContext;
use crate::create_router;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use color_eyre::Result;
use http::{HeaderValue, header};
use std::iter::once;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// The full application: routes, access policy and the HTTP middleware stack.
pub fn create_app(api_state: ApiContext) -> Router {
    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = api_state
        .settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allowed_origins)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::USER_AGENT,
            header::CACHE_CONTROL,
            header::PRAGMA,
        ]);

    create_router(api_state)
        .layer(TraceLayer::new_for_http().on_request(()))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(SetSensitiveRequestHeadersLayer::new(once(
            header::AUTHORIZATION,
        )))
}

pub async fn serve(api_state: ApiContext) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let settings = api_state.settings.clone();
    info!(
        "Access policy: {} (csrf protection: {})",
        api_state.access_policy.name(),
        api_state.access_policy.csrf_protection()
    );

    let app = create_app(api_state);
    let addr = settings.api.bind_address()?;
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    if let Some(tls) = &settings.api.tls {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider was already installed");
        }
        let config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path).await?;
        info!("🐸 Server listening on https://{}", addr);
        axum_server::bind_rustls(addr, config).serve(service).await?;
    } else {
        info!("🐸 Server listening on http://{}", addr);
        axum_server::bind(addr).serve(service).await?;
    }

    Ok(())
}
