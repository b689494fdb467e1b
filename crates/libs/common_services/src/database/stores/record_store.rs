use crate::database::DbError;
use crate::database::global_record::GlobalRecord;
use async_trait::async_trait;

/// Read access to the records of the corpus.
///
/// Implementations never create or mutate records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Records whose source or target text contains `keyword`, ignoring case,
    /// ordered by ascending id and truncated to `limit`.
    ///
    /// ASCII case folding is the same for every store. Beyond ASCII each store
    /// folds case its own way: Postgres `ILIKE` follows the database collation,
    /// the in-memory store uses Rust's Unicode `to_lowercase`. Keywords such as
    /// `İ` or `ß` can therefore match differently.
    async fn find_by_keyword(&self, keyword: &str, limit: i64)
    -> Result<Vec<GlobalRecord>, DbError>;

    /// Cheap round trip to check the store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
