use abm_core::application::{
    audit::AuditLogger,
    ports::{audit::AuditFailureSink, security::SessionVerifier, time::Clock},
    services::{ApplicationServices, Repositories},
};
use abm_core::config::AppConfig;
use abm_core::infrastructure::{
    audit_sink::TracingAuditFailureSink,
    database,
    repositories::{
        PostgresAuditLogRepository, PostgresCompanyReadRepository,
        PostgresCompanyWriteRepository, PostgresOrganizationRepository,
        PostgresPlatformRoleRepository, PostgresProfileRepository,
    },
    security::BiscuitSessionVerifier,
    time::SystemClock,
};
use abm_core::presentation::http::{
    cookies::ActiveOrgCookie, routes::build_router_with_rate_limiter, state::HttpState,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const AUDIT_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

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

    let repos = Repositories {
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        platform_roles: Arc::new(PostgresPlatformRoleRepository::new(pool.clone())),
        organizations: Arc::new(PostgresOrganizationRepository::new(pool.clone())),
        company_write: Arc::new(PostgresCompanyWriteRepository::new(pool.clone())),
        company_read: Arc::new(PostgresCompanyReadRepository::new(pool.clone())),
        audit_logs: Arc::new(PostgresAuditLogRepository::new(pool.clone())),
    };

    let session_verifier: Arc<dyn SessionVerifier> = Arc::new(BiscuitSessionVerifier::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let failure_sink: Arc<dyn AuditFailureSink> = Arc::new(TracingAuditFailureSink);

    let (audit_logger, audit_worker) = AuditLogger::spawn(
        Arc::clone(&repos.audit_logs),
        failure_sink,
        Arc::clone(&clock),
        config.audit_queue_capacity(),
    );

    let services = Arc::new(ApplicationServices::new(
        repos,
        session_verifier,
        audit_logger,
        clock,
        config.organization_selection_policy(),
    ));

    let state = HttpState {
        services,
        cookie: ActiveOrgCookie::new(
            config.active_org_cookie(),
            config.active_org_cookie_max_age(),
        ),
        allowed_origins: config.allowed_origins().to_vec(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router owned the last logger clones; the queue is closed now.
    if audit_worker.shutdown(AUDIT_DRAIN_TIMEOUT).await {
        tracing::info!("audit queue drained");
    }
    pool.close().await;

    Ok(())
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
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
