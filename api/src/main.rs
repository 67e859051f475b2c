use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use ua_api::app::create_app;
use ua_api::config::Config;
use ua_api::routes::accounts::AppState;
use ua_core::repositories::AccountRepository;
use ua_core::services::{
    AccountService, AccountServiceConfig, Clock, PasswordHasher, SystemClock, TokenService,
    TokenServiceConfig,
};
use ua_infra::{BcryptPasswordHasher, DatabasePool, InMemoryAccountRepository, MySqlAccountRepository};
use ua_shared::config::{LogFormat, LoggingConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::load().context("failed to load configuration")?;
    init_logging(&config.app.logging);

    info!(
        "Starting user accounts API ({} environment, {:?} storage)",
        config.environment(),
        config.storage_backend()
    );

    if config.app.auth.jwt.is_using_default_secret() {
        if config.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("Using the built-in development JWT secret");
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.app.auth.jwt), clock.clone())
            .context("invalid token configuration")?,
    );
    let hasher = Arc::new(BcryptPasswordHasher::default());

    match config.storage_backend() {
        StorageBackend::MySql => {
            let pool = DatabasePool::new(&config.app.database)
                .await
                .context("failed to connect to the database")?;
            pool.run_migrations()
                .await
                .context("failed to run database migrations")?;
            info!("Database ready: {}", pool.get_statistics());

            let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
            let result = serve(&config, repository, hasher, token_service, clock).await;
            pool.close().await;
            result
        }
        StorageBackend::Memory => {
            warn!("Accounts are kept in memory and lost on shutdown");
            let repository = Arc::new(InMemoryAccountRepository::new());
            serve(&config, repository, hasher, token_service, clock).await
        }
    }
}

async fn serve<R, H>(
    config: &Config,
    repository: Arc<R>,
    hasher: Arc<H>,
    token_service: Arc<TokenService>,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<()>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let account_service = AccountService::new(
        repository,
        hasher,
        token_service,
        clock,
        AccountServiceConfig::from(&config.app.validation),
    )
    .context("invalid validation patterns")?;

    let state = web::Data::new(AppState::new(Arc::new(account_service)));
    let server_config = config.app.server.clone();
    let cors_config = config.app.cors.clone();
    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config, &cors_config))
        .keep_alive(Duration::from_secs(config.app.server.keep_alive));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initializes env_logger; `RUST_LOG` overrides the configured level
fn init_logging(logging: &LoggingConfig) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(logging.level.as_str()),
    );

    if !logging.timestamp {
        builder.format_timestamp(None);
    }

    match logging.format {
        LogFormat::Json => {
            let timestamp = logging.timestamp;
            builder.format(move |buf, record| {
                let mut line = serde_json::json!({
                    "level": record.level().to_string(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                if timestamp {
                    line["timestamp"] = serde_json::json!(chrono::Utc::now().to_rfc3339());
                }
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Compact => {
            builder.format_target(false).format_module_path(false);
        }
        LogFormat::Pretty => {}
    }

    builder.init();
}
