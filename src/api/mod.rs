//! HTTP API module for the Payroll Engine.
//!
//! This module exposes the engine as JSON endpoints: `POST /calculate` for
//! per-entry payroll lines, `POST /report` for grouped totals, and
//! `GET /health`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ReportRequest};
pub use response::{ApiError, CalculationResponse, HealthResponse, ReportResponse};
pub use state::AppState;
