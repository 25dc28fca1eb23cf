mod chart;
mod config;
mod models;
mod pipeline;
mod routes;
mod snapshot;
mod tests;
mod utils;
use actix_cors::Cors;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use config::Config;
use snapshot::SnapshotStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utils::coingecko::CoinGecko;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("crypto_tracker=info,actix_web=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let coingecko = CoinGecko::new(&config.coingecko).map_err(|e| {
        error!(error = %e, "failed to create CoinGecko client");
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    info!(base_url = coingecko.base_url(), "using market data provider");

    // The list snapshot is fetched once; requests see `loading` until it lands.
    let store = SnapshotStore::new();
    let loader_store = store.clone();
    let loader_client = coingecko.clone();
    tokio::spawn(async move { loader_store.load(&loader_client).await });

    let store_data = Data::new(store);
    let coingecko_data = Data::new(coingecko);
    info!(host = %config.host, port = config.port, "starting crypto tracker");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .app_data(coingecko_data.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes::init)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    server.await?;

    Ok(())
}
