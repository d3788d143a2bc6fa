use anyhow::Result;
use newsdesk::application::{
    ports::{
        notification::PasswordResetNotifier,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::ResetTokenGenerator,
    },
    services::{ApplicationServices, Ports, Repositories},
};
use newsdesk::config::AppConfig;
use newsdesk::infrastructure::{
    database,
    notification::LoggingResetNotifier,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresCategoryRepository, PostgresNewsletterRepository,
        PostgresPasswordResetTokenRepository, PostgresPublisherRepository,
        PostgresSubscriptionRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::UuidResetTokenGenerator,
};
use newsdesk::presentation::http::{routes::build_router, state::HttpState};
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let repos = postgres_repositories(&pool);

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let reset_token_generator: Arc<dyn ResetTokenGenerator> =
        Arc::new(UuidResetTokenGenerator::default());
    let reset_notifier: Arc<dyn PasswordResetNotifier> =
        Arc::new(LoggingResetNotifier::new(config.password_reset_url()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        repos,
        Ports {
            password_hasher,
            token_manager,
            reset_token_generator,
            reset_notifier,
            clock,
        },
    ));

    let state = HttpState {
        services,
        db_pool: Some(pool),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        publishers: Arc::new(PostgresPublisherRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        article_writes: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        newsletters: Arc::new(PostgresNewsletterRepository::new(pool.clone())),
        subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        reset_tokens: Arc::new(PostgresPasswordResetTokenRepository::new(pool.clone())),
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
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
    tracing::info!("shutdown signal received");
}
