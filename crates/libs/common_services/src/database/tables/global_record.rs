use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One collected text pair from the `global_database` table.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRecord {
    pub id: i64,
    pub source_language_id: i32,
    pub target_language_id: i32,
    pub source_text: String,
    pub target_text: String,
    /// User that uploaded the file this pair came from.
    pub uploaded_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl GlobalRecord {
    /// Case-insensitive substring match against either side of the pair.
    ///
    /// Folds case with Unicode `to_lowercase`, which only agrees with Postgres
    /// `ILIKE` for ASCII input.
    #[must_use]
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.source_text.to_lowercase().contains(&keyword)
            || self.target_text.to_lowercase().contains(&keyword)
    }
}
