use dotenvy::dotenv;
use service_desk::{
    config::{database::Store, settings},
    core::bootstrap::bootstrap,
    errors::Result,
    web::{self, AppState},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = settings::load_app_configuration().inspect_err(|e| {
        error!("Critical error loading application configuration: {}", e);
    })?;

    // 4. Ensure schema and service catalog, aborting start on any storage error
    let store = Store::new(app_config.database.url.clone());
    info!("Using database {}", store.url());
    {
        let db = store
            .connect()
            .await
            .inspect_err(|e| error!("Failed to open database: {}", e))?;
        bootstrap(&db)
            .await
            .inspect(|_| info!("Database initialized successfully."))
            .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    }

    // 5. Serve
    let app = web::router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(&app_config.server.bind)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", app_config.server.bind, e))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, keep serving until killed
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested.");
}
