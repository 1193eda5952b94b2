//! Test-only helpers: scripted command runners and scratch project roots.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::config::{BootstrapConfig, CONFIG_FILE_NAME, Step};
use crate::process::{CommandRunner, StepStatus};

/// One recorded invocation: the step and the working directory it ran in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub step: Step,
    pub cwd: PathBuf,
}

/// Runner returning queued statuses in order and recording every call.
///
/// Errors once the queue is exhausted, so an unexpected extra step fails the test.
pub struct ScriptedRunner {
    statuses: RefCell<VecDeque<StepStatus>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    pub fn new(statuses: Vec<StepStatus>) -> Self {
        Self {
            statuses: RefCell::new(statuses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Runner for which every one of `count` steps succeeds.
    pub fn succeeding(count: usize) -> Self {
        Self::new(vec![StepStatus::Exited(0); count])
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, step: &Step, cwd: &Path) -> Result<StepStatus> {
        self.calls.borrow_mut().push(RecordedCall {
            step: step.clone(),
            cwd: cwd.to_path_buf(),
        });
        self.statuses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted status left for {step}"))
    }
}

/// Temporary project root, removed on drop.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp project")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join(CONFIG_FILE_NAME)
    }

    /// Write `cfg` as `bootstrap.toml` in the project root.
    pub fn write_config(&self, cfg: &BootstrapConfig) -> Result<()> {
        let buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
        fs::write(self.config_path(), buf)
            .with_context(|| format!("write {}", self.config_path().display()))
    }
}
