//! Project root resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Default project root: the parent of this crate's directory.
///
/// The crate sits one level below the root, so the root is two levels above
/// the bootstrap sources. The location is baked in at compile time, so this
/// only works for a binary run from its own checkout (`cargo run -p
/// bootstrap`); a copied or installed binary must be given `--root`.
pub fn default_root() -> Result<PathBuf> {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let parent = crate_dir
        .parent()
        .with_context(|| format!("crate dir has no parent {}", crate_dir.display()))?;
    resolve_root(parent)
}

/// Canonicalize `path` and require it to be an existing directory.
///
/// Checked up front so a bad working directory is never mistaken for a
/// missing tool when the child fails to spawn.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .with_context(|| format!("resolve project root {}", path.display()))?;
    if !resolved.is_dir() {
        bail!("project root {} is not a directory", resolved.display());
    }
    Ok(resolved)
}
