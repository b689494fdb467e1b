use crate::api::search::error::SearchError;
use crate::database::global_record::GlobalRecord;
use crate::database::record_store::RecordStore;
use app_state::SearchConstants;
use tracing::debug;

/// Find the records containing `keyword`.
///
/// The keyword is trimmed first. A blank keyword matches nothing and yields an
/// empty list rather than the whole corpus.
pub async fn search_records(
    store: &dyn RecordStore,
    keyword: &str,
    requested_limit: Option<i64>,
    config: &SearchConstants,
) -> Result<Vec<GlobalRecord>, SearchError> {
    let keyword = keyword.trim();
    let length = keyword.chars().count();
    if length > config.max_keyword_length {
        return Err(SearchError::InvalidKeyword {
            length,
            max: config.max_keyword_length,
        });
    }
    let limit = match requested_limit {
        Some(limit) if limit < 1 => return Err(SearchError::InvalidLimit(limit)),
        Some(limit) => limit.min(config.max_limit),
        None => config.default_limit,
    };
    if keyword.is_empty() {
        debug!("Blank keyword, returning no records.");
        return Ok(Vec::new());
    }

    let records = store.find_by_keyword(keyword, limit).await?;
    debug!(
        "Keyword {:?} matched {} records (limit {}).",
        keyword,
        records.len(),
        limit
    );
    Ok(records)
}
