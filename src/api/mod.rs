//! HTTP API module for the overtime engine.
//!
//! This module exposes the engine to the time-entry handlers that consume
//! it: a read-only weekly summary and a multi-job day allocation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BreakRequest, DayAllocationRequest, EntryRequest, WeekCalculationRequest, WorkerRequest,
    convert_entries,
};
pub use response::{ApiError, ApiErrorResponse, DayAllocationResponse, WeekCalculationResponse};
pub use state::AppState;
