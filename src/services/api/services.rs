use {
    crate::{catalog::Catalog, logger::RequestId},
    actix_web::{get, web, HttpResponse},
};

/// Every listing in the catalog, in declaration order.
///
/// Query parameters are not recognized and are ignored.
#[get("/services")]
pub async fn list(catalog: web::Data<Catalog>, request_id: RequestId) -> HttpResponse {
    let listings = catalog.listings();

    tracing::debug!(%request_id, count = listings.len(), "listing services");

    HttpResponse::Ok().json(listings)
}
