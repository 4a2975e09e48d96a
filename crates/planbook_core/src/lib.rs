//! Core domain logic for Planbook.
//! This crate is the single source of truth for schedule business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::schedule::{NewSchedule, Schedule, ScheduleId};
pub use repo::schedule_repo::{MemoryScheduleRepository, ScheduleRepository};
pub use service::schedule_service::{
    ScheduleQuery, ScheduleRequest, ScheduleResponse, ScheduleService, ScheduleServiceError,
    ServiceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
