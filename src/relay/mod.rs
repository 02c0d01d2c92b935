//! Question Relay
//!
//! Forwards free-text questions to an external answering process and
//! returns its output. The HTTP layer only sees the [`Answerer`] trait, so
//! the script-backed implementation can be swapped for an in-process one
//! without touching the routes.

mod script;

use async_trait::async_trait;
use thiserror::Error;

pub use script::ScriptRelay;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Failed to spawn answering process: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write question to process: {0}")]
    StdinWrite(std::io::Error),

    #[error("Failed to collect process output: {0}")]
    Wait(std::io::Error),

    #[error("Answering process exited with {status}: {stderr}")]
    NonZeroExit {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Answering process wrote to stderr: {0}")]
    StderrOutput(String),

    #[error("Answering process timed out after {0}s")]
    Timeout(u64),

    #[error("Answering process produced non-UTF-8 output")]
    InvalidUtf8,
}

/// Capability for answering a question with free text.
#[async_trait]
pub trait Answerer: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String, RelayError>;
}
