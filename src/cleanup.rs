// Registry of generated files that the application deletes at shutdown.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::logging::Logger;

/// The single capability frame extraction needs from its host.
pub trait CleanupRegistry {
    fn register_for_deletion(&mut self, path: PathBuf);
}

impl CleanupRegistry for Vec<PathBuf> {
    fn register_for_deletion(&mut self, path: PathBuf) {
        self.push(path);
    }
}

#[derive(Debug, Clone, Default)]
pub struct CleanupList {
    paths: Vec<PathBuf>,
}

impl CleanupList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// delete every registered file and empty the list, returning how many
    /// files were actually removed
    pub fn cleanup(&mut self, logger: &mut dyn Logger) -> usize {
        let mut removed = 0;

        for path in self.paths.drain(..) {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                // already gone, e.g. registered twice or removed by the user
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    logger.warn(format!("Failed to remove {}: {}", path.display(), e));
                }
            }
        }

        removed
    }
}

impl CleanupRegistry for CleanupList {
    fn register_for_deletion(&mut self, path: PathBuf) {
        self.paths.push(path);
    }
}
