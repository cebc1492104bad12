use actix_web::get;
use actix_web::web::{self, Data, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::Definition;
use crate::controllers;
use crate::metrics::AppMetrics;

pub fn route(app: &mut ServiceConfig) {
    app.app_data(Data::new(AppMetrics::new()));
    app.service(index);
    // Movie
    app.service(controllers::movie::paginate);
    app.service(controllers::movie::store);
    app.service(controllers::movie::show);
    app.service(controllers::movie::update);
    app.service(controllers::movie::delete);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    // Metrics endpoint
    app.service(controllers::metrics::metrics);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").url("/api.json", Definition::openapi()));
}

#[get("/")]
pub async fn index() -> &'static str {
    "Cine Magenta catalog service"
}
