//! HTTP listener for the front door.

use crate::router::{build_router, AppState, RpcConfig};
use paracross_executor::ParacrossQuery;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Bind and serve the JSON-RPC front door until the task is dropped.
pub async fn serve(config: RpcConfig, query: Arc<dyn ParacrossQuery>) -> std::io::Result<()> {
    let state = AppState {
        query,
        config: Arc::new(config.clone()),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("[paracross-rpc] listening on {}", config.bind_addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
