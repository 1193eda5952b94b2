//! Setup plan stored in `<root>/bootstrap.toml`.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "bootstrap.toml";

/// One external command of the setup plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Executable name, resolved through `PATH`.
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Step {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Bootstrap configuration (TOML).
///
/// Missing fields default to the template's `uv` plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Lines printed after every step succeeded, each prefixed with `@@@`.
    pub hints: Vec<String>,

    /// Commands run in order; the first failure stops the plan.
    pub steps: Vec<Step>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            hints: vec![
                "Dev env ready".to_string(),
                String::new(),
                "uv run poe app        # Start app".to_string(),
                "uv run poe test       # Check tests".to_string(),
                "uv run poe lint_full  # Linter".to_string(),
            ],
            steps: vec![
                Step::new("uv", &["sync", "--all-extras"]),
                Step::new("uv", &["run", "pre-commit", "install"]),
            ],
        }
    }
}

impl BootstrapConfig {
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(anyhow!("steps must be a non-empty array"));
        }
        for (index, step) in self.steps.iter().enumerate() {
            if step.program.trim().is_empty() {
                return Err(anyhow!("steps[{index}].program must be non-empty"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file that must exist.
///
/// Used for a path given explicitly on the command line.
pub fn load_config(path: &Path) -> Result<BootstrapConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(path, &contents)
}

/// Load config from the implied location in the project root.
///
/// If the file does not exist, returns `BootstrapConfig::default()`. Any other
/// read error is reported.
pub fn load_config_or_default(path: &Path) -> Result<BootstrapConfig> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(path, &contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let cfg = BootstrapConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
    }
}

fn parse_config(path: &Path, contents: &str) -> Result<BootstrapConfig> {
    let cfg: BootstrapConfig =
        toml::from_str(contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
