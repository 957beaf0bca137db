//! Server: reads settings, opens the store, ensures the schema, serves the API.

use pc_store::{app, apply_migrations, connect, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pc_store=info,tower_http=info")),
        )
        .init();

    let pool = connect(&settings).await?;
    apply_migrations(&pool).await?;

    let router = app(AppState::new(pool), settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
