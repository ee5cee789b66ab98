//! Endpoint handlers, one module per resource.

pub mod analytics;
pub mod chat;
pub mod feedback;
pub mod health;
