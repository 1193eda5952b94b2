//! Development environment bootstrap for the project template.
//!
//! Runs a short, fixed plan of external tool invocations against the project
//! root and turns the outcome into a process exit code:
//!
//! - **[`config`]**: The setup plan (steps and hint lines), loaded from an
//!   optional `bootstrap.toml`.
//! - **[`process`]**: Child process invocation behind the [`process::CommandRunner`]
//!   seam so tests can script tool behavior.
//! - **[`setup`]**: Orchestration. Fail-fast step execution and user-facing
//!   reporting.

pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod paths;
pub mod process;
pub mod setup;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
