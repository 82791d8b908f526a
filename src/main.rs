use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use trivia_api::config::{log_filter, Config};
use trivia_api::{api, db::init_db, seed_if_empty, RecordStore, Repository};

#[tokio::main]
async fn main() {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let pool = init_db(&config.database_path)
        .await
        .with_context(|| format!("Failed to initialize database at {}", config.database_path))?;

    let repo = Arc::new(Repository::new(pool));
    if config.seed_on_start {
        seed_if_empty(&repo)
            .await
            .context("Failed to seed the trivia catalogue")?;
    }

    let store: Arc<dyn RecordStore> = repo;
    let app = api::create_router(api::AppState::new(store));

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
