//! # Paracross RPC — Read-Only Front Door
//!
//! JSON-RPC 2.0 over HTTP for paracross status queries: the current
//! cursor of a title and the aggregation record at a (title, height).
//! Reads go straight through the query port; writes happen only as
//! host-chain transactions and never pass through this crate.
//!
//! Remote peers can be gated by an IP allowlist; everything else is a
//! plain request/response cycle with the standard JSON-RPC error codes.

pub mod error;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{build_router, route_method, AppState, RpcConfig, RpcRequest, RpcResponse};
pub use server::serve;
