use eyre::{Result, eyre};
use http::Method;
use salvo::cors::Cors;
use salvo::prelude::*;
use tracing::info;

use my_api::config::ServerConfig;
use my_api::routes::create_router;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    my_api::logging::init_tracing();

    info!("Starting my-api...");

    // Load configuration
    let config = ServerConfig::load_and_validate().map_err(|e| eyre!(e))?;

    info!("Configuration loaded: {:?}", config);

    // Build CORS handler (read-only API, so GET is enough)
    let cors = Cors::new()
        .allow_origin(salvo::cors::AllowOrigin::mirror_request())
        .allow_methods(vec![Method::GET, Method::OPTIONS])
        .allow_headers(vec!["content-type", "accept"])
        .max_age(3600)
        .into_handler();

    let router = create_router();
    let service = Service::new(router).hoop(cors);

    info!("Binding to address: {}", &config.bind_address);
    let acceptor = TcpListener::new(config.bind_address.clone()).bind().await;

    info!("Server listening on {}", config.bind_address);
    info!("OpenAPI document at /doc, Swagger UI at /ui");

    Server::new(acceptor).serve(service).await;

    Ok(())
}
