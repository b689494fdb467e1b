use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Query, State};
use common_services::api::search::error::SearchError;
use common_services::api::search::interfaces::SearchParams;
use common_services::api::search::service::search_records;
use common_services::database::global_record::GlobalRecord;
use tracing::instrument;

/// Search the corpus for records containing a keyword.
///
/// Matches are case-insensitive substrings of either the source or the target
/// text, ordered by record id. A blank keyword returns an empty list.
///
/// # Errors
///
/// Returns a `SearchError` if the input is invalid or the database query fails.
#[utoipa::path(
    get,
    path = "/search",
    tag = "Search",
    params(
        SearchParams
    ),
    responses(
        (status = 200, description = "Matching records", body = Vec<GlobalRecord>),
        (status = 400, description = "Missing, too long or otherwise invalid parameters."),
        (status = 500, description = "A database or internal error occurred."),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn get_search_results(
    State(context): State<ApiContext>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<GlobalRecord>>, SearchError> {
    let records = search_records(
        context.store.as_ref(),
        &params.keyword,
        params.limit,
        &context.settings.constants.search,
    )
    .await?;
    Ok(Json(records))
}
