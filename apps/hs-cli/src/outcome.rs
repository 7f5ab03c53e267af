//! Final status of an invocation: what to print and how to exit.

use hs_app::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Rejected flags or arguments.
    Usage(String),
    /// Stopped by the user; a clean exit.
    Interrupted(String),
    /// Any other failure while running.
    Failed(String),
}

impl Outcome {
    pub fn from_error(err: &AppError) -> Self {
        match err {
            AppError::Interrupted => Outcome::Interrupted(format!("Interrupted: {err}")),
            e if e.is_usage() => Outcome::Usage(format!("error: {e}")),
            e => Outcome::Failed(format!(
                "Failed to run EPANET simulation due to an unexpected error: {e}"
            )),
        }
    }

    pub fn from_clap(err: &clap::Error) -> Self {
        Outcome::Usage(err.render().to_string().trim_end().to_string())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Interrupted(_) => AppError::Interrupted.exit_code(),
            Outcome::Usage(_) | Outcome::Failed(_) => 1,
        }
    }

    /// Interrupts are reported on stdout, failures on stderr.
    pub fn emit(&self) {
        match self {
            Outcome::Success => {}
            Outcome::Interrupted(msg) => println!("{msg}"),
            Outcome::Usage(msg) | Outcome::Failed(msg) => eprintln!("{msg}"),
        }
    }
}
