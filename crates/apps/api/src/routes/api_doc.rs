use crate::routes::{root, search};
use common_services::database::global_record::GlobalRecord;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        search::handlers::get_search_results,
    ),
    components(
        schemas(
            GlobalRecord,
        ),
    ),
    tags(
        (name = "Search", description = "Record search endpoints"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
