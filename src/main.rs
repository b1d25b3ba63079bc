use dotenvy::dotenv;
use pedido_service::config::Settings;
use pedido_service::{build_repository, build_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(std::io::Error::other)?;
    let repo = build_repository(&settings.store).map_err(std::io::Error::other)?;

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(repo, &settings.host, settings.port)?.await
}
