//! HTTP API module for the compensation engine.
//!
//! This module provides the REST API endpoint for computing compensation
//! and taxation reports from revenue rows and declared figures.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ReportRequest, RowRequest};
pub use response::ApiError;
pub use state::AppState;
