//! Stable exit codes for the bootstrap CLI.
//!
//! A step that runs and fails passes its own exit code through unchanged.

/// Every setup step succeeded.
pub const OK: i32 = 0;
/// A step's executable could not be found or launched.
pub const MISSING_TOOL: i32 = 1;
/// Invalid project root, unreadable config, or another internal error.
pub const INVALID: i32 = 1;
