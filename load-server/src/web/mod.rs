//! Web layer for the load service.
//!
//! Provides HTTP endpoints for creating and viewing loads.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
