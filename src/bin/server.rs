use anyhow::Context;
use tokio::net::TcpListener;
use trivia_api::configuration::get_configuration;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::{server::app::run_server, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = get_configuration().context("Failed to read configuration")?;
    init_tracing(&settings.log);

    let pool = establish_connection(
        settings.database.connect_options(),
        settings.database.max_connections,
    )
    .await
    .with_context(|| format!("Cannot open {}", settings.database.path.display()))?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    let addr = settings.application.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    run_server(listener, pool).await
}
