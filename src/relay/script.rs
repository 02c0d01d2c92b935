//! Script-backed answerer
//!
//! Spawns one interpreter process per question, writes the question to its
//! stdin, and collects stdout/stderr until the process exits. Admission is
//! bounded by a semaphore and each run has a hard deadline; a child that
//! outlives the deadline is killed rather than left to hang the request.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::Semaphore;

use super::{Answerer, RelayError};
use crate::config::RelayConfig;

pub struct ScriptRelay {
    interpreter: PathBuf,
    script: PathBuf,
    limiter: Arc<Semaphore>,
    timeout: Duration,
}

impl ScriptRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            interpreter: config.interpreter.clone(),
            script: config.script.clone(),
            // Semaphore::MAX_PERMITS is plenty; 0 means unlimited
            limiter: Arc::new(Semaphore::new(if config.max_concurrent == 0 {
                Semaphore::MAX_PERMITS
            } else {
                config.max_concurrent
            })),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    async fn run_script(&self, question: &str) -> Result<String, RelayError> {
        // The whole run sits under one deadline: a child that never reads
        // stdin would otherwise block the write forever once the question
        // outgrows the pipe buffer. On expiry the child is dropped and
        // kill_on_drop reaps it.
        let run = async {
            let mut child = Command::new(&self.interpreter)
                .arg(&self.script)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .map_err(RelayError::Spawn)?;

            // stdin is piped, so take() cannot return None
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(question.as_bytes())
                    .await
                    .map_err(RelayError::StdinWrite)?;
                // Closing stdin signals end-of-question to the script
            }

            child.wait_with_output().await.map_err(RelayError::Wait)
        };

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| RelayError::Timeout(self.timeout.as_secs()))??;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(RelayError::NonZeroExit {
                status: output.status,
                stderr,
            });
        }

        // Anything on stderr invalidates the answer, even on exit 0
        if !stderr.is_empty() {
            return Err(RelayError::StderrOutput(stderr));
        }

        String::from_utf8(output.stdout).map_err(|_| RelayError::InvalidUtf8)
    }
}

#[async_trait]
impl Answerer for ScriptRelay {
    async fn answer(&self, question: &str) -> Result<String, RelayError> {
        // Queue behind the admission limit rather than rejecting
        let _permit = self
            .limiter
            .acquire()
            .await
            .expect("relay semaphore closed");

        tracing::debug!(
            interpreter = %self.interpreter.display(),
            script = %self.script.display(),
            question_len = question.len(),
            "Relaying question to script"
        );

        let result = self.run_script(question).await;

        match &result {
            Ok(answer) => {
                tracing::info!(answer_len = answer.len(), "Question answered");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Question relay failed");
            }
        }

        result
    }
}
