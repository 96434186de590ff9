//! Route dispatch, independent of the transport.
//!
//! `dispatch` is a pure function of the context and the request parts so the
//! full routing table is testable without sockets; `server` owns the
//! tiny_http glue and response headers.

use loadcast_core::{BuildingParameters, ValidationError};
use tiny_http::Method;

use crate::context::AppContext;
use crate::predict::{self, PredictError};

/// Fixed greeting served at the root, regardless of model-loading state.
pub const WELCOME_MESSAGE: &str = "Welcome to Energy Efficiency API!";

/// A transport-independent response: status plus optional JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl ApiResponse {
    fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
        }
    }

    const fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }
}

/// Dispatch one request.
pub fn dispatch(ctx: &AppContext, method: &Method, url: &str, body: &str) -> ApiResponse {
    let path = url.split('?').next().unwrap_or(url);
    match (method, path) {
        // Browser preflight; CORS headers are attached by the transport layer.
        (Method::Options, _) => ApiResponse::no_content(),
        (Method::Get, "/") => {
            tracing::info!("root endpoint was called");
            ApiResponse::json(200, &serde_json::json!({ "message": WELCOME_MESSAGE }))
        }
        (Method::Post, "/predict") => handle_predict(ctx, body),
        (_, "/" | "/predict") => {
            ApiResponse::json(405, &serde_json::json!({ "detail": "Method Not Allowed" }))
        }
        _ => ApiResponse::json(404, &serde_json::json!({ "detail": "Not Found" })),
    }
}

/// 422 for a request body that could not be read off the socket.
#[must_use]
pub fn body_read_failure() -> ApiResponse {
    validation_response(&ValidationError::body("failed to read request body"))
}

fn handle_predict(ctx: &AppContext, body: &str) -> ApiResponse {
    let params: BuildingParameters = match serde_json::from_str(body) {
        Ok(params) => params,
        Err(error) => {
            tracing::debug!(%error, "malformed prediction request body");
            return validation_response(&ValidationError::body(error.to_string()));
        }
    };

    tracing::info!(?params, "prediction request");

    match predict::predict(ctx.models.as_deref(), &params) {
        Ok(response) => {
            tracing::info!(
                heating_load = response.heating_load,
                cooling_load = response.cooling_load,
                efficiency = %response.efficiency,
                "prediction served"
            );
            match serde_json::to_value(&response) {
                Ok(json) => ApiResponse::json(200, &json),
                Err(error) => {
                    tracing::error!(%error, "failed to serialize prediction response");
                    opaque_failure()
                }
            }
        }
        Err(PredictError::Validation(error)) => {
            tracing::debug!(%error, "prediction request rejected");
            validation_response(&error)
        }
        // Inference detail stays in the server log; the caller only ever
        // sees an opaque failure.
        Err(error @ (PredictError::ModelsUnavailable | PredictError::Inference(_))) => {
            tracing::error!(%error, "prediction failed");
            opaque_failure()
        }
    }
}

fn validation_response(error: &ValidationError) -> ApiResponse {
    ApiResponse::json(422, &serde_json::json!({ "detail": error.errors }))
}

fn opaque_failure() -> ApiResponse {
    ApiResponse::json(500, &serde_json::json!({ "detail": "Prediction failed" }))
}
