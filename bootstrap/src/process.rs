//! Running setup steps as child processes.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, instrument};

use crate::config::Step;

/// How a single step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The tool ran to completion with this exit code.
    Exited(i32),
    /// The executable could not be located or launched.
    Missing,
}

impl StepStatus {
    pub fn success(self) -> bool {
        self == StepStatus::Exited(0)
    }
}

/// Executes one step with `cwd` as working directory, blocking until it exits.
pub trait CommandRunner {
    fn run(&self, step: &Step, cwd: &Path) -> Result<StepStatus>;
}

/// Spawns real processes with inherited stdio so tool output reaches the user.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(program = %step.program, cwd = %cwd.display()))]
    fn run(&self, step: &Step, cwd: &Path) -> Result<StepStatus> {
        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!(args = ?step.args, "spawning child process");
        let mut child = match cmd.spawn() {
            Ok(c) => c,
            Err(e) if is_missing_executable(&e) => {
                debug!(err = %e, "executable not found");
                return Ok(StepStatus::Missing);
            }
            Err(e) => {
                error!(err = %e, "failed to spawn command");
                return Err(e).with_context(|| format!("spawn {step}"));
            }
        };

        let status = child.wait().with_context(|| format!("wait for {step}"))?;
        debug!(exit_code = ?status.code(), "command finished");
        Ok(StepStatus::Exited(exit_code(status)))
    }
}

fn is_missing_executable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    )
}

/// Exit code of a finished child. Signal deaths map to `-signal`, which the
/// OS truncates to `256 - signal` when passed on to `process::exit`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    1
}
