use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod api;
mod config;
mod invite_page;

// anything RUST_LOG doesn't mention logs at info and above
fn log_filter(directives: Option<&str>) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.parse_lossy(directives.unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(log_filter(dotenv::var("RUST_LOG").ok().as_deref()))
		.init();

	let config = config::Config::from_env()?;

	tracing::info!("Read .env...");
	tracing::info!(
		"Counting down to {} with {} gallery photos",
		shared_data::target_time_string(&config.event.target),
		config.event.photos.len()
	);

	if !config.pkg_dir.is_dir() {
		// the page still works without it, it just won't be interactive
		tracing::warn!(
			"PKG_DIR ({}) isn't a directory; the frontend won't be served. Build it into there (see README)",
			config.pkg_dir.display()
		);
	}

	let app = Router::new()
		.route("/", get(invite_page::get_invite_page))
		.route("/api/event", get(api::get_event))
		.route("/api/countdown", get(api::get_countdown))
		.nest_service("/pkg", ServeDir::new(&config.pkg_dir))
		.with_state(Arc::new(config.event));

	let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Serving axum on {addr}...");

	axum::serve(listener, app).await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn logs_info_without_rust_log() {
		assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
		assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
	}

	#[test]
	fn rust_log_overrides_the_default() {
		assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
		assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
	}
}
