use color_eyre::eyre::Result;
use common_services::database::global_record::GlobalRecord;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use std::time::Duration;
use tracing::info;
use url::Url;

/// Point `database_url` at another database on the same server.
pub fn with_database(database_url: &str, database_name: &str) -> Result<String> {
    let mut url = Url::parse(database_url)?;
    url.set_path(&format!("/{database_name}"));
    Ok(url.to_string())
}

/// Connect to the server's `postgres` database, used to create and drop test databases.
pub async fn connect_management_pool(database_url: &str) -> Result<PgPool> {
    let management_url = with_database(database_url, "postgres")?;
    Ok(PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&management_url)
        .await?)
}

/// Drop `database_name` if it exists, then create it empty.
pub async fn create_test_database(management_pool: &PgPool, database_name: &str) -> Result<()> {
    force_drop_db(management_pool, database_name).await?;
    management_pool
        .execute(format!("CREATE DATABASE \"{database_name}\"").as_str())
        .await?;
    info!("Created test database {}", database_name);
    Ok(())
}

pub async fn force_drop_db(management_pool: &PgPool, database_name: &str) -> Result<()> {
    management_pool
        .execute(format!("DROP DATABASE IF EXISTS \"{database_name}\" WITH (FORCE)").as_str())
        .await?;
    Ok(())
}

/// Insert `records` with their ids as given.
pub async fn seed_database(pool: &PgPool, records: &[GlobalRecord]) -> Result<()> {
    for record in records {
        sqlx::query(
            r"
            INSERT INTO global_database
                (id, source_language_id, target_language_id, source_text, target_text, uploaded_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(record.id)
        .bind(record.source_language_id)
        .bind(record.target_language_id)
        .bind(&record.source_text)
        .bind(&record.target_text)
        .bind(record.uploaded_by)
        .bind(record.created_at)
        .execute(pool)
        .await?;
    }
    info!("Seeded {} records", records.len());
    Ok(())
}
