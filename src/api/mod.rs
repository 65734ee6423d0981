//! HTTP API module for the workforce metrics engine.
//!
//! Exposes the derived-metric rules as JSON endpoints for the HR
//! administration backend.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DailyLogRequest, ObservationRequest, PerformanceScoreRequest, ProductivitySummaryRequest,
    ScheduleHoursRequest, TaskEvaluationRequest, TimeLogValidationRequest,
};
pub use response::{
    ApiError, PerformanceScoreResponse, TaskEvaluationResponse, TimeLogValidationResponse,
};
pub use state::AppState;
