use std::path::{Path, PathBuf};

use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha512};
use tower_http::trace::TraceLayer;
use tower_sessions::{service::SignedCookie, MemoryStore, SessionManagerLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    service::{seed::seed_sample_content, user::UserService},
};

/// Install the tracing subscriber, filtered by `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,inkwell=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    if let Some(dir) = sqlite_parent_dir(&config.database_url) {
        std::fs::create_dir_all(&dir)?;
    }

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Directory that must exist before SQLite can create the database file
fn sqlite_parent_dir(database_url: &str) -> Option<PathBuf> {
    let path = database_url.strip_prefix("sqlite://")?;
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Configure session management with an in-memory store and a signed session cookie
pub fn connect_to_session(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    use time::Duration;
    use tower_sessions::{cookie::Key, cookie::SameSite, Expiry};

    let digest = Sha512::digest(config.secret_key.as_bytes());
    let key = Key::from(digest.as_slice());

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key)
}

/// Ensure the admin account exists and seed sample content when enabled
pub async fn bootstrap(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    for var in config.insecure_defaults() {
        tracing::warn!("{} is set to its insecure default, override it before deploying", var);
    }

    let (admin, created) = UserService::new(db)
        .ensure_admin(&config.admin_username, &config.admin_password)
        .await?;

    if !created {
        tracing::debug!(user_id = %admin.id, "Admin user already exists");
    }

    if config.seed_sample_content {
        seed_sample_content(db).await?;
    }

    Ok(())
}

/// Connect, bootstrap and serve until a shutdown signal arrives, then close the database
pub async fn run(config: Config) -> Result<(), Error> {
    let db = connect_to_database(&config).await?;
    bootstrap(&config, &db).await?;

    let session = connect_to_session(&config);

    let app = router::routes()
        .with_state(AppState::from(db.clone()))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
