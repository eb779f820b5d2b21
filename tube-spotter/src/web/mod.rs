//! HTTP surface for the rendering client.
//!
//! The AR client posts location fixes and draws whatever markers come back.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Session};
