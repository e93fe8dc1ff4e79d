use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use teamboard_core::application::{
    ports::{ClockPort, SlugGeneratorPort},
    services::ApplicationServices,
};
use teamboard_core::config::AppConfig;
use teamboard_core::domain::{
    organization::OrganizationRepository,
    project::{ProjectRepository, ProjectStatsRepository},
    team::TeamRepository,
};
use teamboard_core::infrastructure::{
    repositories::InMemoryStore, time::SystemClock, util::DefaultSlugGenerator,
};
use teamboard_core::presentation::http::{routes::build_router_with_options, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let store = match config.fixtures_path() {
        Some(path) => InMemoryStore::load(path, slugger.as_ref(), Arc::clone(&clock))
            .with_context(|| format!("loading fixtures from {}", path.display()))?,
        None => {
            tracing::warn!("FIXTURES_PATH not set; serving an empty data set");
            InMemoryStore::empty(Arc::clone(&clock))
        }
    };
    tracing::info!(
        organizations = store.organization_count(),
        "data source ready"
    );
    let store = Arc::new(store);

    let org_repo: Arc<dyn OrganizationRepository> = store.clone();
    let team_repo: Arc<dyn TeamRepository> = store.clone();
    let project_repo: Arc<dyn ProjectRepository> = store.clone();
    let stats_repo: Arc<dyn ProjectStatsRepository> = store;

    let services = Arc::new(ApplicationServices::new(
        org_repo,
        team_repo,
        project_repo,
        stats_repo,
        config.default_stats_period(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_options(
        state,
        config.allowed_origins(),
        config.rate_limit_enabled(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
