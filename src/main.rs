mod catalog;
mod error;
mod services;
mod settings;

mod logger;

use {
    crate::{catalog::Catalog, logger::TracingLogger, settings::Settings},
    actix_web::{
        body::MessageBody,
        dev::{ServiceFactory, ServiceRequest, ServiceResponse},
        web, App, HttpServer,
    },
};

fn app(
    catalog: web::Data<Catalog>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(catalog)
        .service(services::root())
        .service(services::api())
        .default_service(web::to(services::not_found))
        .wrap(TracingLogger)
}

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    logger::init()?;

    let settings = Settings::from_env()?;
    let catalog = web::Data::new(Catalog::builtin()?);

    tracing::info!(
        address = %settings.bind_address(),
        listings = catalog.listings().len(),
        "starting service tool api"
    );

    let mut server = HttpServer::new(move || app(catalog.clone()));

    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }

    server.bind(settings.bind_address())?.run().await?;

    Ok(())
}
