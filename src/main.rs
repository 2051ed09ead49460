#![warn(clippy::pedantic)]

mod config;
mod error;
mod routes;

use std::net::SocketAddr;

use nagayo_core::fetch::Fetcher;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, routes::AppState};

#[tokio::main]
async fn main() -> miette::Result<()> {
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(
			std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
		))
		.with(tracing_subscriber::fmt::layer())
		.init();

	let config = Config::load()?;
	let fetcher = Fetcher::new(&config.schedule_url, config.fetch_timeout).map_err(error::Error::from)?;
	let app = routes::router(AppState { fetcher }, &config.static_dir);

	let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
	info!("serving {} on http://{addr}", config.schedule_url);

	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.map_err(error::Error::from)?;
	axum::serve(listener, app).await.map_err(error::Error::from)?;

	Ok(())
}
