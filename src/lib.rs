pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use std::error::Error;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::StoreSettings;
use crate::errors::AppError;
use crate::handlers::{itens, pedidos};
use crate::infrastructure::{DieselPedidoRepository, InMemoryPedidoRepository};
use crate::openapi::ApiDoc;

pub use crate::db::{create_pool, DbPool};
pub use crate::domain::ports::PedidoRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Build the repository selected by `store`. For Postgres this creates the
/// pool and applies pending migrations.
pub fn build_repository(
    store: &StoreSettings,
) -> Result<Arc<dyn PedidoRepository>, Box<dyn Error + Send + Sync>> {
    match store {
        StoreSettings::Postgres {
            database_url,
            pool_size,
        } => {
            let pool = create_pool(database_url, *pool_size)?;
            run_migrations(&pool)?;
            Ok(Arc::new(DieselPedidoRepository::new(pool)))
        }
        StoreSettings::Memory => {
            log::warn!("Using the in-memory store; data is lost on restart");
            Ok(Arc::new(InMemoryPedidoRepository::new()))
        }
    }
}

/// Register the pedido/item routes and the extractor error policy.
///
/// Undecodable bodies and query strings are answered like any other store
/// failure (500). A path id that is not a UUID cannot match a row (404).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Store(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Store(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()))
    .service(
        web::scope("/pedidos")
            .route("", web::post().to(pedidos::create_pedido))
            .route("", web::get().to(pedidos::list_pedidos))
            .route("/{id}", web::get().to(pedidos::get_pedido))
            .route("/{id}", web::patch().to(pedidos::update_pedido))
            .route("/{id}", web::put().to(pedidos::update_pedido))
            .route("/{id}", web::delete().to(pedidos::delete_pedido))
            .route("/{id}/itens", web::post().to(itens::create_item))
            .route("/{id}/itens", web::get().to(itens::list_itens))
            .route("/{id}/itens/{item_id}", web::get().to(itens::get_item))
            .route("/{id}/itens/{item_id}", web::patch().to(itens::update_item))
            .route("/{id}/itens/{item_id}", web::put().to(itens::update_item))
            .route("/{id}/itens/{item_id}", web::delete().to(itens::delete_item)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    repo: Arc<dyn PedidoRepository>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(repo.clone()))
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
