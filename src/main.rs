use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use radio_search::catalog::store::{CatalogStore, SqliteCatalog};
use radio_search::service::front::SearchService;
use radio_search::service::handlers::{handle_health, handle_reload, handle_search};
use sqlx::sqlite::SqlitePoolOptions;

/// Parse `--bind` and `--database`. `None` when either flag is missing,
/// has no value, or the bind address does not parse.
fn parse_args(args: &[String]) -> Option<(SocketAddr, String)> {
    let mut bind_addr: Option<SocketAddr> = None;
    let mut database: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args.get(i + 1)?.parse().ok()?);
                i += 2;
            }
            "--database" => {
                database = Some(args.get(i + 1)?.clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Some((bind_addr?, database?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let (bind_addr, database) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Usage: {} --bind <addr:port> --database <path>", args[0]);
            eprintln!(
                "Example: {} --bind 127.0.0.1:8090 --database ./catalog.db",
                args[0]
            );

            std::process::exit(1);
        }
    };

    // 1. Catalog store:
    tracing::info!("Connecting to catalog database at {database}");
    let pool = SqlitePoolOptions::new()
        .connect(&format!("sqlite://{database}"))
        .await?;
    let store: Arc<dyn CatalogStore> = Arc::new(SqliteCatalog::new(pool));

    // 2. Initial load and build. Fatal on failure: the process must never
    //    accept /search traffic with no index ever published.
    let service = Arc::new(SearchService::init(store).await?);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/health", get(handle_health))
        .route("/reload", post(handle_reload))
        .layer(Extension(service));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {bind_addr}");
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
