//! HTTP front end for the calculator.
//!
//! One endpoint, `POST /api/v1/calculate`, takes `{"expression": "..."}` and
//! answers `{"result": "..."}` or `{"error": "..."}`. The evaluator's
//! [`ErrorKind`] is mapped to a fixed message here; the core knows nothing
//! about HTTP.

use std::net::{IpAddr, SocketAddr};

use axum::{
    body::Bytes,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use calc_eval::{calc, ErrorKind};
use clap::Args;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

pub const CALCULATE_PATH: &str = "/api/v1/calculate";

const WRONG_METHOD: &str = "Wrong Method";
const INVALID_BODY: &str = "Invalid Body";
const NOT_FOUND: &str = "Not Found";
const GENERIC_FAILURE: &str = "Error calculation";

/// Listen address, from flags or the environment
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "CALC_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    expression: String,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    result: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Status code and message for an evaluator failure.
///
/// Every kind is a client error in the expression itself, so all of them
/// are 422; kinds added later fall back to the generic message.
pub fn failure_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    let message = match kind {
        ErrorKind::InvalidExpression => GENERIC_FAILURE,
        ErrorKind::DivisionByZero => "Division by zero",
        ErrorKind::MismatchedParentheses => "Mismatched parentheses",
        ErrorKind::InvalidNumber => "Invalid number",
        ErrorKind::UnexpectedToken => "Unexpected token",
        ErrorKind::NotEnoughValues => "Not enough values",
        ErrorKind::InvalidOperator => "Invalid operator",
        ErrorKind::OperatorAtEnd => "Operator at end",
        ErrorKind::MultipleDecimalPoints => "Multiple decimal points",
        ErrorKind::EmptyInput => "Empty input",
        _ => GENERIC_FAILURE,
    };
    (StatusCode::UNPROCESSABLE_ENTITY, message)
}

/// Build the application router
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(CALCULATE_PATH, post(calculate).fallback(wrong_method))
        .fallback(not_found)
        .layer(cors)
}

async fn health() -> &'static str {
    "ok"
}

async fn wrong_method(method: Method) -> Response {
    log::debug!("rejected {method} {CALCULATE_PATH}");
    error_response(StatusCode::METHOD_NOT_ALLOWED, WRONG_METHOD)
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, NOT_FOUND)
}

// The body is parsed by hand so that a missing or wrong Content-Type is not
// rejected before we get to look at it
async fn calculate(body: Bytes) -> Response {
    let request: CalculateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("invalid request body: {e}");
            return error_response(StatusCode::BAD_REQUEST, INVALID_BODY);
        }
    };
    if request.expression.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, INVALID_BODY);
    }

    log::debug!("calculating {:?}", request.expression);
    match calc(&request.expression) {
        Ok(value) => (
            StatusCode::OK,
            Json(CalculateResponse {
                result: value.to_string(),
            }),
        )
            .into_response(),
        Err(kind) => {
            log::info!("{:?} calculation failed with error: {kind}", request.expression);
            let (status, message) = failure_for(kind);
            error_response(status, message)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    log::info!("calc_server listening on http://{addr}");
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
