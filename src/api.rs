use utoipa::OpenApi;

use crate::{controllers, database, requests, responses};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Movie"),
        (name = "Health"),
        (name = "Metrics"),
    ),
    paths(
        controllers::movie::paginate,
        controllers::movie::store,
        controllers::movie::show,
        controllers::movie::update,
        controllers::movie::delete,

        controllers::health::health,
        controllers::health::health_db,

        controllers::metrics::metrics,
    ),
    components(schemas(
        requests::movie::MovieRequest,

        responses::movie::Movie,
        responses::movie::MoviePaginationOrder,
        responses::movie::MoviePaginationSort,
        responses::movie::MoviePaginationResponse,
        responses::movie::MovieDeleted,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
        database::PoolStatus,
    )),
)]
pub struct Definition;
