//! Folio bookstore API server entry point.

use std::error::Error;
use std::sync::Arc;

use folio_api::config::ApiConfig;
use folio_api::state::AppState;
use folio_catalog::infrastructure::in_memory::InMemoryBookRepository;
use folio_core::clock::SystemClock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Folio API server");

    let config = ApiConfig::from_env()?;

    // Build application state.
    let clock = Arc::new(SystemClock);
    let book_repository = Arc::new(InMemoryBookRepository::new());
    let order_processor = config.order_processor(clock);
    let app_state = AppState::new(book_repository, order_processor);

    // Expire idle carts in the background.
    tokio::spawn(
        app_state
            .carts
            .clone()
            .expire_idle(config.cart_idle_timeout, config.cart_sweep_interval()),
    );

    tracing::info!(
        write_as_file = config.write_as_file,
        file_location = %config.file_location.display(),
        cart_idle_timeout_secs = config.cart_idle_timeout.as_secs(),
        "order notifications and cart expiry configured"
    );

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = folio_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
