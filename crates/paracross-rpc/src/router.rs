//! JSON-RPC routing over the paracross query surface.
//!
//! One POST endpoint accepts JSON-RPC 2.0 requests and maps methods to
//! the read-only query port. The write path does not exist here: commits
//! reach the executor only as host-chain transactions.
//!
//! Methods:
//!
//! | Method | Params | Result |
//! |--------|--------|--------|
//! | `paracross_getTitle` | `[title]` | current cursor of the title |
//! | `paracross_getTitleHeight` | `[title, height]` | aggregation record, or null |

use crate::error::ApiError;
use axum::extract::{ConnectInfo, State};
use axum::routing::post;
use axum::{Json, Router};
use paracross_executor::ParacrossQuery;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, warn};

/// Front-door configuration.
#[derive(Clone, Debug)]
pub struct RpcConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Remote addresses allowed to query. `None` admits everyone.
    pub ip_allowlist: Option<Vec<IpAddr>>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 8801).into(),
            ip_allowlist: None,
        }
    }
}

impl RpcConfig {
    /// Whether a remote peer may query this front door.
    pub fn admits(&self, ip: IpAddr) -> bool {
        match &self.ip_allowlist {
            Some(allowed) => allowed.contains(&ip),
            None => true,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The read-only query surface.
    pub query: Arc<dyn ParacrossQuery>,
    /// Front-door configuration.
    pub config: Arc<RpcConfig>,
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    /// Protocol version; must be "2.0".
    pub jsonrpc: String,
    /// Method name.
    pub method: String,
    /// Positional parameters.
    #[serde(default)]
    pub params: Option<serde_json::Value>,
    /// Request id echoed in the response.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Serialize)]
pub struct RpcResponse {
    /// Always "2.0".
    pub jsonrpc: &'static str,
    /// Result on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Echoed request id.
    pub id: Option<serde_json::Value>,
}

impl RpcResponse {
    fn ok(result: serde_json::Value, id: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            result: Some(result),
            error: None,
            id,
        }
    }

    fn err(error: ApiError, id: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// Route a JSON-RPC method to the query surface.
pub fn route_method(
    query: &dyn ParacrossQuery,
    method: &str,
    params: Option<&serde_json::Value>,
) -> Result<serde_json::Value, ApiError> {
    match method {
        "paracross_getTitle" => {
            let title: String = parse_param(params, 0)?;
            let status = query
                .title_status(&title)
                .map_err(|e| ApiError::internal(&e.to_string()))?;
            serde_json::to_value(status).map_err(|e| ApiError::internal(&e.to_string()))
        }
        "paracross_getTitleHeight" => {
            let title: String = parse_param(params, 0)?;
            let height: i64 = parse_param(params, 1)?;
            let stat = query
                .title_height_status(&title, height)
                .map_err(|e| ApiError::internal(&e.to_string()))?;
            serde_json::to_value(stat).map_err(|e| ApiError::internal(&e.to_string()))
        }
        _ => Err(ApiError::method_not_found(method)),
    }
}

/// Extract the `index`-th positional parameter.
fn parse_param<T: serde::de::DeserializeOwned>(
    params: Option<&serde_json::Value>,
    index: usize,
) -> Result<T, ApiError> {
    let list = params
        .and_then(|p| p.as_array())
        .ok_or_else(|| ApiError::invalid_params("expected a positional parameter array"))?;
    let value = list
        .get(index)
        .ok_or_else(|| ApiError::invalid_params(&format!("missing parameter {index}")))?;
    serde_json::from_value(value.clone())
        .map_err(|e| ApiError::invalid_params(&format!("parameter {index}: {e}")))
}

/// Build the front-door router: a single JSON-RPC POST endpoint.
pub fn build_router(state: AppState) -> Router {
    Router::new().route("/", post(handle_rpc)).with_state(state)
}

async fn handle_rpc(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: String,
) -> Json<RpcResponse> {
    if !state.config.admits(peer.ip()) {
        warn!("[paracross-rpc] rejected peer {}", peer.ip());
        return Json(RpcResponse::err(ApiError::rejected(), None));
    }

    let request: RpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(_) => return Json(RpcResponse::err(ApiError::parse_error(), None)),
    };

    if request.jsonrpc != "2.0" {
        return Json(RpcResponse::err(
            ApiError::invalid_request("jsonrpc must be \"2.0\""),
            request.id,
        ));
    }

    debug!("[paracross-rpc] {} from {}", request.method, peer.ip());
    match route_method(state.query.as_ref(), &request.method, request.params.as_ref()) {
        Ok(result) => Json(RpcResponse::ok(result, request.id)),
        Err(error) => Json(RpcResponse::err(error, request.id)),
    }
}
