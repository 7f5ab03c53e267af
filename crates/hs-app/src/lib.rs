//! Shared application service layer for hydrosim.
//!
//! Centralizes command-line validation, run orchestration, cancellation,
//! and report building so front ends stay thin.

pub mod args;
pub mod cancel;
pub mod error;
pub mod progress;
pub mod report;
pub mod run_service;

pub use args::parse_cmdline;
pub use cancel::CancelToken;
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use report::RunReport;
pub use run_service::{RunRequest, run};
