use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, IntoParams, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free text, matched case-insensitively as a substring of either side of a record.
    pub keyword: String,
    /// Maximum number of records to return.
    pub limit: Option<i64>,
}
