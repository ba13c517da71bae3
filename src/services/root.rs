use {
    crate::logger::RequestId,
    actix_web::{dev::HttpServiceFactory, get, HttpResponse},
    serde::Serialize,
};

pub const STATUS_MESSAGE: &str = "Service Tool API is running";

#[derive(Serialize)]
struct Status {
    status: &'static str,
}

pub fn service() -> impl HttpServiceFactory + 'static {
    status
}

#[get("/")]
pub async fn status(request_id: RequestId) -> HttpResponse {
    tracing::debug!(%request_id, "status requested");

    HttpResponse::Ok().json(Status {
        status: STATUS_MESSAGE,
    })
}
