pub mod services;

use actix_web::{dev::HttpServiceFactory, web};

pub fn service() -> impl HttpServiceFactory + 'static {
    web::scope("/api").service(services::list)
}
