//! Katalog server entry point
//!
//! Serves the catalog GraphQL API on port 4000. The port is fixed; there
//! is no configuration surface beyond `RUST_LOG` for log filtering.

use anyhow::Result;
use katalog::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = CatalogStore::seeded();
    let schema = build_schema(store);
    let app = build_router(schema);

    let addr = "0.0.0.0:4000";
    tracing::info!("katalog running on http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
