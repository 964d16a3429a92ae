#![forbid(unsafe_code)]

mod errors;
pub mod handlers;
mod helpers;
pub mod models;
pub mod routes;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use sbrest::SbClient;

pub use errors::{ApiError, ErrorResponse};
pub type Result<T> = std::result::Result<T, ApiError>;

/// connection parameters of the external store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
    pub table: String,
}

/// Shared handle to the external store.
///
/// Constructed once at process start and passed read-only into every
/// request-handling task; each operation issues a fresh round trip,
/// nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct Store {
    pub client: SbClient,
    pub table: String,
}

impl Store {
    pub fn new(cfg: &StoreConfig) -> Result<Self> {
        let client = SbClient::new(&cfg.url, &cfg.key)?;
        Ok(Store {
            client,
            table: cfg.table.clone(),
        })
    }
}

pub async fn server(port: u32, cfg: StoreConfig) -> Result<()> {
    let store = web::Data::new(Store::new(&cfg)?);
    log::info!("serving table {} on 0.0.0.0:{}", cfg.table, port);
    HttpServer::new(move || {
        App::new()
            // all origins, methods and headers are allowed
            .wrap(Cors::new().finish())
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(routes::routes)
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await?;
    Ok(())
}
