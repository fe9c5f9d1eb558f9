use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use luggageguard_web::cache::start_config_refresher;
use luggageguard_web::config::AppConfig;
use luggageguard_web::pricing::PricingConfig;
use luggageguard_web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luggageguard_web=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid environment")?;

    let pricing = match &config.pricing_config_path {
        Some(path) => {
            info!("Loading pricing config from {}", path.display());
            PricingConfig::from_json_file(path)
                .with_context(|| format!("Invalid pricing config file {}", path.display()))?
        }
        None => {
            info!("Using default pricing config");
            PricingConfig::default()
        }
    };

    let db = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect_lazy(url)
                .context("Invalid DATABASE_URL")?;
            info!("Pricing config will be read from the database");
            Some(pool)
        }
        None => None,
    };

    let address = config.bind_address();
    let refresh_every = config.pricing_cache_ttl;
    let state = AppState::new(config, pricing, db);

    if let Some(pool) = state.db.clone() {
        tokio::spawn(start_config_refresher(
            state.cache.clone(),
            pool,
            state.pricing.clone(),
            refresh_every,
        ));
    }

    let app = build_router(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
