//! Placeholder application shipped with the project template.

use std::io::{self, Write};

/// The single line the application prints.
pub const GREETING: &str = "Hello from python template!";

/// Write the greeting line to `out`.
pub fn greet<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}
