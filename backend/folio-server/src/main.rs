use folio_server::{AppState, build_router, error::ServerError, logger};

use folio_config::{Config, MailerConfig};
use folio_db::{Database, Storage};
use folio_mailer::{Notifier, SmtpNotifier};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Never fails; without a reachable database the API runs degraded
    let database = Database::connect(config.database.uri(), &config.database.name).await;

    let mut state = AppState::new(Storage::new(database.clone()))
        .with_api_config(config.api.clone())
        .with_cors_config(config.cors.clone())
        .with_environment(config.server.environment.clone());

    if let Some(notifier) = build_notifier(&config.mailer) {
        state = state.with_notifier(notifier);
    }

    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::bind(bind_addr.as_str(), e))?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

/// SMTP notifier when a mailer is configured
fn build_notifier(mailer: &MailerConfig) -> Option<Arc<dyn Notifier>> {
    let smtp_host = mailer.smtp_host.as_deref().filter(|_| mailer.is_enabled())?;

    match SmtpNotifier::new(
        smtp_host,
        &mailer.smtp_username,
        &mailer.smtp_password,
        &mailer.sender_name,
        &mailer.sender_email,
        &mailer.notify_email,
    ) {
        Ok(notifier) => {
            info!("Contact notifications enabled via {}", smtp_host);
            let notifier: Arc<dyn Notifier> = Arc::new(notifier);
            Some(notifier)
        }
        Err(e) => {
            warn!("Contact notifications disabled: {}", e);
            None
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
