use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub fn ensure_dir<P: AsRef<Path>>(p: P) -> std::io::Result<()> {
    let p = p.as_ref();
    if !p.as_os_str().is_empty() && !p.exists() {
        fs::create_dir_all(p)?;
    }
    Ok(())
}

/// Write `dest` through a temporary file in the same directory.
///
/// The temp file only replaces `dest` once `write` succeeds; on any error it
/// is removed and `dest` is left untouched.
pub fn write_atomic<F>(dest: &Path, write: F) -> Result<PathBuf>
where
    F: FnOnce(&mut fs::File) -> Result<()>,
{
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_dir(parent).with_context(|| format!("Failed to create {}", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    write(tmp.as_file_mut())?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(dest)
        .with_context(|| format!("Failed to move output into {}", dest.display()))?;

    Ok(dest.to_path_buf())
}
