//! Backend for a Yu-Gi-Oh! companion single-page app.
//!
//! # Routes
//!
//! | Route                  | Source                                   |
//! |------------------------|------------------------------------------|
//! | `/api/search-cards`    | YGOPRODeck `cardinfo.php` (`q`/`archtype`) |
//! | `/api/card-info`       | YGOPRODeck `cardinfo.php` (`id`)         |
//! | `/api/archetypes`      | YGOPRODeck `archetypes.php`              |
//! | `/api/banlist`         | embedded banlists, optional `format`     |
//! | `/api/top-decks`       | embedded tournament decks                |
//! | `/api/decks-by-card`   | decks holding a card, by name fragment   |
//!
//! Anything else is served from the frontend directory, with extensionless paths
//! falling back to `index.html` so client-side routes survive a reload.
//!
//! Every `/api` response uses the same envelope:
//! ```json
//! {"data": ..., "error": "", "status": "success"}
//! ```
//!
//! # Environment
//!
//! - `PORT`, default `8080`
//! - `UPSTREAM_API_BASE`, default `https://db.ygoprodeck.com/api/v7`
//! - `UPSTREAM_TIMEOUT_SECS`, default `10`
//! - `FRONTEND_DIR`, default first of `../frontend`, `frontend`, `<exe>/../../frontend`
//! - `RUST_LOG`, default `ygo_deck_server=info,tower_http=info`

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod catalog;
pub mod config;
pub mod deck_matcher;
pub mod error;
pub mod frontend;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod state;

use config::Config;
use error::ServerError;
use models::deck::Deck;
use routes::{
    archetypes_handler, banlist_handler, card_info_handler, decks_by_card_handler,
    search_cards_handler, top_decks_handler,
};
use state::State;

const DEFAULT_LOG_FILTER: &str = "ygo_deck_server=info,tower_http=info";

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/search-cards", get(search_cards_handler))
        .route("/api/card-info", get(card_info_handler))
        .route("/api/archetypes", get(archetypes_handler))
        .route("/api/banlist", get(banlist_handler))
        .route("/api/top-decks", get(top_decks_handler))
        .route("/api/decks-by-card", get(decks_by_card_handler))
        .fallback(frontend::serve_frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> Result<(), ServerError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();

    info!("Loading configuration...");
    let config = Config::load()?;
    info!("Frontend directory: {}", config.frontend_dir.display());
    info!(
        "Catalog: {} deck(s) with {} card(s), {} banlist(s)",
        catalog::all_decks().len(),
        catalog::all_decks().iter().map(Deck::card_count).sum::<usize>(),
        catalog::all_banlists().len()
    );

    let address = config.address();
    let state = State::new(config)?;
    let app = router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
