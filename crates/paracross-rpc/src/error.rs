//! JSON-RPC error shape and standard codes.

use serde::Serialize;

/// JSON-RPC 2.0 error object.
#[derive(Clone, Debug, Serialize)]
pub struct ApiError {
    /// JSON-RPC error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
    /// Optional structured detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    /// -32700: the request body was not valid JSON.
    pub fn parse_error() -> Self {
        Self {
            code: -32700,
            message: "Parse error".to_string(),
            data: None,
        }
    }

    /// -32600: the request was not a valid JSON-RPC 2.0 request.
    pub fn invalid_request(detail: &str) -> Self {
        Self {
            code: -32600,
            message: format!("Invalid request: {detail}"),
            data: None,
        }
    }

    /// -32601: unknown method.
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    /// -32602: parameters do not match the method signature.
    pub fn invalid_params(detail: &str) -> Self {
        Self {
            code: -32602,
            message: format!("Invalid params: {detail}"),
            data: None,
        }
    }

    /// -32603: the query surface failed.
    pub fn internal(detail: &str) -> Self {
        Self {
            code: -32603,
            message: format!("Internal error: {detail}"),
            data: None,
        }
    }

    /// -32000: the caller's address is not on the allowlist.
    pub fn rejected() -> Self {
        Self {
            code: -32000,
            message: "reject".to_string(),
            data: None,
        }
    }
}
