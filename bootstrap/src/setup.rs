//! Fail-fast execution of the setup plan and its user-facing report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{BootstrapConfig, Step};
use crate::exit_codes;
use crate::process::{CommandRunner, StepStatus};

/// Structured result of running the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Every step exited with status 0.
    Ready,
    /// A step ran and exited non-zero; later steps were not run.
    Failed { step: Step, code: i32 },
    /// A step's executable is not installed; later steps were not run.
    Missing { step: Step },
}

impl SetupOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupOutcome::Ready => exit_codes::OK,
            SetupOutcome::Failed { code, .. } => *code,
            SetupOutcome::Missing { .. } => exit_codes::MISSING_TOOL,
        }
    }
}

/// Run `steps` in order under `root`, stopping at the first failure.
pub fn run_steps<R: CommandRunner>(root: &Path, steps: &[Step], runner: &R) -> Result<SetupOutcome> {
    for step in steps {
        match runner.run(step, root).with_context(|| format!("run {step}"))? {
            status if status.success() => info!(%step, "step succeeded"),
            StepStatus::Exited(code) => {
                info!(%step, code, "step failed");
                return Ok(SetupOutcome::Failed {
                    step: step.clone(),
                    code,
                });
            }
            StepStatus::Missing => {
                info!(%step, "step executable missing");
                return Ok(SetupOutcome::Missing { step: step.clone() });
            }
        }
    }
    Ok(SetupOutcome::Ready)
}

/// Prepare the development environment and return the process exit code.
///
/// Progress and hints go to `out`; the single failure diagnostic goes to `err`.
pub fn run_setup<R, O, E>(
    root: &Path,
    config: &BootstrapConfig,
    runner: &R,
    out: &mut O,
    err: &mut E,
) -> Result<i32>
where
    R: CommandRunner,
    O: Write,
    E: Write,
{
    writeln!(out, "==> Setting up development environment").context("write banner")?;
    writeln!(out, "Project root: {}", root.display()).context("write banner")?;
    writeln!(out).context("write banner")?;
    out.flush().context("flush stdout")?;

    let outcome = run_steps(root, &config.steps, runner)?;
    match &outcome {
        SetupOutcome::Ready => write_hints(out, &config.hints)?,
        SetupOutcome::Failed { code, .. } => {
            writeln!(err, "@@@ Error, exit code of the command {code}")
                .context("write diagnostic")?;
        }
        SetupOutcome::Missing { step } => {
            writeln!(
                err,
                "@@@ Error: file or command missing. Ensure '{}' is present.",
                step.program
            )
            .context("write diagnostic")?;
        }
    }
    Ok(outcome.exit_code())
}

fn write_hints<O: Write>(out: &mut O, hints: &[String]) -> Result<()> {
    for hint in hints {
        if hint.is_empty() {
            writeln!(out, "@@@").context("write hints")?;
        } else {
            writeln!(out, "@@@ {hint}").context("write hints")?;
        }
    }
    Ok(())
}
