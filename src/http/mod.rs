//! Axum-based HTTP server for the scheduling API.
//!
//! The transport layer is deliberately thin: request DTOs are converted to
//! core requests, the service layer does the work, and the core's `Result`
//! is shaped back into the outcome body the API promises.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
