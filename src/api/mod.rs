//! HTTP surface for the engine.
//!
//! Routes are nested under `/api/`: report intake (`/chat`), health worker
//! feedback (`/feedback`) and the surveillance dashboards
//! (`/analytics/*`). The router is composable; `api_router()` returns a
//! `Router` that can be mounted on any axum server.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ApiSession, ServerError};
pub use types::ApiContext;
