use bookreview::config::AppConfig;
use bookreview::db::{self, Database};
use bookreview::AppState;
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookreview=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env()?;

    let pool = db::create_pool(&config).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(
        max_connections = config.database_max_connections,
        query_timeout_ms = config.query_timeout.as_millis() as u64,
        "Database ready"
    );

    let state = AppState {
        db: Database::new(pool, config.query_timeout),
        config: config.clone(),
    };
    let app = bookreview::routes::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(host = %addr, "Starting book review API server");
    axum::serve(listener, app).await?;

    Ok(())
}
