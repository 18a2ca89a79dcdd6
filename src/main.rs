use tarecruit::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tarecruit=debug,tower_http=info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&config).await?;
    let notifier = startup::build_notifier(&config)?;

    let app = router::routes()
        .with_state(AppState { db, notifier })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
