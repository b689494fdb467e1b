use crate::database::global_record::GlobalRecord;
use crate::database::record_store::RecordStore;
use crate::database::{DbError, contains_pattern};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_by_keyword(
        &self,
        keyword: &str,
        limit: i64,
    ) -> Result<Vec<GlobalRecord>, DbError> {
        Ok(sqlx::query_as::<_, GlobalRecord>(
            r"
            SELECT
                id,
                source_language_id,
                target_language_id,
                source_text,
                target_text,
                uploaded_by,
                created_at
            FROM global_database
            WHERE source_text ILIKE $1 ESCAPE '\'
               OR target_text ILIKE $1 ESCAPE '\'
            ORDER BY id ASC
            LIMIT $2
            ",
        )
        .bind(contains_pattern(keyword))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
