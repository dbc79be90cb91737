//! Axum routes for the notification endpoints.
//!
//! Every route normalizes its wire format into a [`Notification`], runs it
//! through the shared [`Receiver`] and maps the receipt to a response.
//! Unparseable requests get `400` before the core is reached.

use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, rejection::QueryRejection, DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use scopehook_core::{HandlerSet, Notification, Receipt, Receiver, VerifyResult};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::adapters;
use crate::config::ReceiverConfig;
use crate::errors::{ConfigError, ServeError};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

type Pairs = Vec<(String, String)>;

/// Shared application state for the routes.
pub struct AppState {
    /// Verifier bound to the configured key.
    pub receiver: Receiver,
    /// Callbacks for verified events.
    pub handlers: Arc<dyn HandlerSet + Send + Sync>,
    /// Status returned when the signature check fails.
    pub unauthenticated_status: StatusCode,
}

impl AppState {
    /// Builds state from configuration.
    pub fn from_config(
        config: &ReceiverConfig,
        handlers: Arc<dyn HandlerSet + Send + Sync>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            receiver: Receiver::new(config.api_key.clone()),
            handlers,
            unauthenticated_status: config.unauthenticated_status()?,
        })
    }
}

/// Build the router with all notification endpoints.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/json", post(handle_json))
        .route("/post", post(handle_post))
        .route("/get", get(handle_get))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(
    config: ReceiverConfig,
    handlers: Arc<dyn HandlerSet + Send + Sync>,
) -> Result<(), ServeError> {
    let state = AppState::from_config(&config, handlers)?;
    if state.receiver.key().is_empty() {
        warn!("no API key configured; every signature is computed without a secret");
    }

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServeError::Bind {
            address: address.clone(),
            source,
        })?;
    info!(address = %address, "listening for notifications");

    axum::serve(listener, build_router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("receiver stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}

/// POST /json -- raw JSON object body
async fn handle_json(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match adapters::from_json(&body) {
        Ok(fields) => respond(&state, &fields),
        Err(e) => {
            warn!(error = %e, "rejecting unparseable JSON notification");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// POST /post -- urlencoded form body, query parameters first
async fn handle_post(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Pairs>, QueryRejection>,
    form: Result<Form<Pairs>, FormRejection>,
) -> Response {
    match (query, form) {
        (Ok(Query(query)), Ok(Form(form))) => {
            respond(&state, &adapters::from_query_and_form(query, form))
        }
        (Err(e), _) => {
            warn!(error = %e, "rejecting unparseable query string");
            StatusCode::BAD_REQUEST.into_response()
        }
        (_, Err(e)) => {
            warn!(error = %e, "rejecting unparseable form body");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// GET /get -- query parameters
async fn handle_get(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Pairs>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => respond(&state, &adapters::from_pairs(query)),
        Err(e) => {
            warn!(error = %e, "rejecting unparseable query string");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

fn respond(state: &AppState, fields: &Notification) -> Response {
    match state.receiver.receive(fields, &*state.handlers) {
        Ok(Receipt::Dispatched(outcome)) => {
            debug!(outcome = ?outcome, "notification dispatched");
            (StatusCode::OK, "OK").into_response()
        }
        Ok(Receipt::Unauthenticated(reason)) => {
            match reason {
                VerifyResult::MissingSignature => warn!("notification rejected: no signature"),
                VerifyResult::SignatureMismatch => {
                    warn!("notification rejected: wrong signature");
                    debug!(supplied = ?fields.signature(), "signature mismatch");
                }
                VerifyResult::Authentic => {}
            }
            status_only(state.unauthenticated_status)
        }
        Err(e) => {
            warn!(error = %e, "notification rejected");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

fn status_only(status: StatusCode) -> Response {
    if status.is_success() {
        (status, "OK").into_response()
    } else {
        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}
