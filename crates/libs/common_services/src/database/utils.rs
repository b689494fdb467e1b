use crate::database::DbError;
use app_state::DatabaseConstants;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

/// Get a database connection pool, running migrations first when configured to.
///
/// # Errors
///
/// * `PgPool::connect` can return an error if the database connection fails.
/// * `sqlx::migrate` can return an error if migrations fail.
pub async fn get_db_pool(
    database_url: &str,
    db_settings: &DatabaseConstants,
) -> Result<PgPool, DbError> {
    info!("Connecting to database.");
    let pool = PgPoolOptions::new()
        .max_connections(db_settings.max_connections)
        .min_connections(db_settings.min_connection)
        .max_lifetime(Duration::from_secs(db_settings.max_lifetime))
        .idle_timeout(Duration::from_secs(db_settings.idle_timeout))
        .acquire_timeout(Duration::from_secs(db_settings.acquire_timeout))
        .test_before_acquire(true)
        .connect(database_url)
        .await?;

    if db_settings.run_migrations {
        sqlx::migrate!("../../../migrations").run(&pool).await?;
        info!("Finished database migrations.");
    }

    Ok(pool)
}

/// Escape `%`, `_` and `\` so the keyword is matched literally by `LIKE`/`ILIKE ... ESCAPE '\'`.
#[must_use]
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `ILIKE` pattern matching `keyword` anywhere in the column.
#[must_use]
pub fn contains_pattern(keyword: &str) -> String {
    format!("%{}%", escape_like(keyword))
}
