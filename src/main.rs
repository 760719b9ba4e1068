//! TechFest Registration Backend
//!
//! Main application entry point

use tokio::net::TcpListener;
use tracing::{info, warn};

use techfest::database::{self, DatabaseService};
use techfest::handlers::build_router;
use techfest::services::auth::AuthService;
use techfest::utils::logging;
use techfest::{AppState, ServiceFactory, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    dotenv::dotenv().ok();
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must live for the whole run so the
    // file appender keeps flushing
    let _logging_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", techfest::info());

    // Initialize database connection
    info!("Connecting to database...");
    let pool = database::create_pool(&settings.database).await?;
    database::run_migrations(&pool).await?;
    let db = DatabaseService::new(pool);

    // Seed the default admin account
    let auth = AuthService::new(settings.auth.clone());
    let password_hash = auth.hash_password(&settings.admin_seed.password)?;
    let created = db
        .seed_default_admin(
            &settings.admin_seed.name,
            &settings.admin_seed.email,
            &password_hash,
        )
        .await?;
    if created {
        warn!(
            email = %settings.admin_seed.email,
            "Default admin created with the configured seed password, change it"
        );
    }

    // Initialize services and shared state
    info!("Initializing services...");
    let services = ServiceFactory::new(settings.clone(), db.clone())?;
    let state = AppState::new(settings.clone(), db, services);

    let router = build_router(state)?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => warn!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
