//! Progress events streamed to front ends while a run executes.

use std::path::PathBuf;

/// Stages of a run, emitted in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    LoadingNetwork,
    ExtractingZones,
    Completed,
}

impl RunStage {
    pub fn label(self) -> &'static str {
        match self {
            RunStage::LoadingNetwork => "loading network",
            RunStage::ExtractingZones => "extracting zones",
            RunStage::Completed => "completed",
        }
    }
}

/// One progress notification; `elapsed_wall_s` is measured from the start of the run.
#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub input: PathBuf,
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
}

impl RunProgressEvent {
    pub fn stage(
        input: PathBuf,
        stage: RunStage,
        elapsed_wall_s: f64,
        message: Option<String>,
    ) -> Self {
        Self {
            input,
            stage,
            elapsed_wall_s,
            message,
        }
    }
}
