use api::access::policy::build_access_policy;
use api::api_state::ApiContext;
use api::serve;
use app_state::load_app_settings;
use color_eyre::Result;
use common_services::database::get_db_pool;
use common_services::database::pg_record_store::PgRecordStore;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("api={0},common_services={0},tower_http=debug", settings.logging.level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = get_db_pool(&settings.secrets.database_url, &settings.constants.database).await?;
    let context = ApiContext {
        access_policy: build_access_policy(settings.api.access_policy),
        store: Arc::new(PgRecordStore::new(pool)),
        settings,
    };

    serve(context).await?;

    Ok(())
}
