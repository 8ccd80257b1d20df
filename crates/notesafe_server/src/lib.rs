//! HTTP server wiring for NoteSafe (API, handlers, and shared state).

/// Response envelope shared by every endpoint.
pub mod envelope;
/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for note endpoints.
pub mod handlers;

pub use envelope::ApiResponse;
pub use error::HttpError;
pub use notesafe_core::{
    config, db, models, AppError, Config, Database, NoteService, XorCodec, DEFAULT_PORT,
};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use notesafe_core::constants::DEFAULT_FRONTEND_ORIGIN;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NoteService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct shared application state.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration; its key drives the content codec.
    /// - `db`: Open database handle.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when the configured key is empty.
    pub fn new(config: Config, db: Database) -> Result<Self, AppError> {
        let codec = config.codec()?;
        Ok(Self {
            service: Arc::new(NoteService::new(db, codec)),
            config: Arc::new(config),
        })
    }
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
/// - `allow_public_access`: Whether non-loopback bind targets are permitted.
///
/// # Returns
/// A validated socket address that enforces loopback when public access is disabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match std::env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

fn frontend_origin(config: &Config) -> HeaderValue {
    match config.frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(err) => {
            tracing::warn!(
                "Invalid FRONTEND_ORIGIN='{}': {}. Falling back to {}",
                config.frontend_origin,
                err,
                DEFAULT_FRONTEND_ORIGIN
            );
            HeaderValue::from_static(DEFAULT_FRONTEND_ORIGIN)
        }
    }
}

fn cors_layer(config: &Config, allow_public_access: bool) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
    if allow_public_access {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        CorsLayer::new()
            .allow_origin(frontend_origin(config))
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let cors = cors_layer(&state.config, allow_public_access);
    let body_limit = state.config.max_note_size;

    Router::new()
        .route(
            "/notes",
            post(handlers::note::create_note).get(handlers::note::list_notes),
        )
        .route(
            "/notes/:id",
            get(handlers::note::get_note)
                .put(handlers::note::update_note)
                .delete(handlers::note::delete_note),
        )
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(body_limit))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state, allow_public_access);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

#[cfg(test)]
mod tests {
    use super::{frontend_origin, resolve_bind_address};
    use notesafe_core::constants::DEFAULT_FRONTEND_ORIGIN;
    use notesafe_core::env::{env_lock, EnvGuard};
    use notesafe_core::Config;
    use std::net::SocketAddr;

    fn config(port: u16) -> Config {
        Config {
            db_path: String::from("/tmp/notesafe-db"),
            port,
            xor_key: String::from("key"),
            frontend_origin: String::from("http://localhost:5173"),
            max_note_size: 1024,
        }
    }

    #[test]
    fn resolve_bind_address_enforces_loopback_when_public_access_disabled() {
        let _lock = env_lock().lock().expect("env lock");
        let _bind = EnvGuard::set("BIND", "0.0.0.0:4040");
        let resolved = resolve_bind_address(&config(4040), false);
        assert_eq!(resolved.ip().to_string(), "127.0.0.1");
        assert_eq!(resolved.port(), 4040);

        let public = resolve_bind_address(&config(4040), true);
        assert_eq!(public, SocketAddr::from(([0, 0, 0, 0], 4040)));
    }

    #[test]
    fn resolve_bind_address_allows_loopback_and_invalid_fallback() {
        let _lock = env_lock().lock().expect("env lock");
        {
            let _bind = EnvGuard::remove("BIND");
            let loopback = resolve_bind_address(&config(4041), false);
            assert_eq!(loopback, SocketAddr::from(([127, 0, 0, 1], 4041)));
        }

        let _bind = EnvGuard::set("BIND", "bad:host");
        let fallback = resolve_bind_address(&config(4041), false);
        assert_eq!(fallback, SocketAddr::from(([127, 0, 0, 1], 4041)));
    }

    #[test]
    fn frontend_origin_falls_back_on_invalid_header_value() {
        let mut bad = config(1);
        bad.frontend_origin = String::from("http://bad\norigin");
        assert_eq!(frontend_origin(&bad), DEFAULT_FRONTEND_ORIGIN);
        assert_eq!(frontend_origin(&config(1)), "http://localhost:5173");
    }
}
