mod cache;
mod origin;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use crate::cache::{AssetCache, CACHE_NAME};
use crate::origin::Origin;
use crate::state::AppState;

const DEFAULT_PORT: u16 = 4180;

#[tokio::main]
async fn main() -> Result<()> {
    let origin_url = std::env::var("MTLCAL_ORIGIN")
        .context("MTLCAL_ORIGIN not set (origin URL the assets are served from)")?;
    let origin = Origin::new(origin_url);
    let cache = AssetCache::at_default_root()?;

    // Install, then activate: stage the current cache version, swap it in,
    // prune the others. A failed install is not fatal; requests fall back
    // to the network until the next start.
    match cache.install(&origin).await {
        Ok(count) => {
            println!("Precached {} assets from {} into cache {}", count, origin, CACHE_NAME);
            for name in cache.activate()? {
                println!("Removed stale cache: {}", name);
            }
        }
        Err(err) => eprintln!("Precache failed, serving without a cache refresh: {err:#}"),
    }

    let state = AppState { cache, origin };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .fallback(routes::intercept)
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));
    println!("mtlcal-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
