pub mod api;
pub mod root;

use {
    crate::{error::ApiError, logger::RequestId},
    actix_web::{HttpRequest, HttpResponse},
};

pub use self::{api::service as api, root::service as root};

/// Fallback for every method and path pair without a registered route.
pub async fn not_found(req: HttpRequest, request_id: RequestId) -> Result<HttpResponse, ApiError> {
    tracing::debug!(%request_id, method = %req.method(), path = %req.path(), "no route matched");

    Err(ApiError::NotFound)
}
