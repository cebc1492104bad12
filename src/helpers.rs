use actix_web::{HttpResponse, Responder};
use serde::Serialize;

/// Convert anyhow::Result into an HTTP response
///
/// Successful service results are serialized as JSON; failures are logged
/// and collapsed into a generic error body.
pub struct AnyhowResponder<T>(pub anyhow::Result<T>);

impl<T> Responder for AnyhowResponder<T>
where
    T: Serialize,
{
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        match self.0 {
            Ok(data) => HttpResponse::Ok().json(data),
            Err(e) => {
                tracing::error!("Service error: {:?}", e);

                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error",
                    "message": e.to_string(),
                }))
            }
        }
    }
}
