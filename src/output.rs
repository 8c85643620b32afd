//! Documentation directory on disk.
//!
//! The writer owns nothing but a path. It is reset once before a test run and
//! then receives one write per documented test case.
//!
//! ### I/O characteristics & caveats
//! - Writes fully overwrite the target; two test cases resolving to the same
//!   file identifier race and the last one to finish wins.
//! - Plain writes are not atomic. With `atomic` enabled the content goes to a
//!   temporary file in the same directory which is then renamed over the target.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::BlueprintError;

#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
    extension: String,
    atomic: bool,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(root: P, extension: S) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            atomic: false,
        }
    }

    pub fn atomic(mut self, on: bool) -> Self {
        self.atomic = on;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a document with `file_identifier` is written to.
    pub fn path_for(&self, file_identifier: &str) -> PathBuf {
        self.root.join(format!("{file_identifier}.{}", self.extension))
    }

    /// Creates the directory when missing and removes every file directly inside it.
    ///
    /// Subdirectories are left untouched.
    pub fn reset(&self) -> Result<(), BlueprintError> {
        let fail = |source: std::io::Error| {
            log::error!("Cannot reset documentation directory {}: {}", self.root.display(), source);
            BlueprintError::DirectoryReset {
                path: self.root.clone(),
                source,
            }
        };

        fs::create_dir_all(&self.root).map_err(fail)?;

        let mut removed = 0usize;
        for entry in fs::read_dir(&self.root).map_err(fail)? {
            let entry = entry.map_err(fail)?;
            if entry.file_type().map_err(fail)?.is_dir() {
                log::debug!("Keeping directory {}", entry.path().display());
                continue;
            }
            fs::remove_file(entry.path()).map_err(fail)?;
            removed += 1;
        }

        log::debug!("Reset {} ({} files removed)", self.root.display(), removed);
        Ok(())
    }

    /// Writes `content` to `<root>/<file_identifier>.<extension>`, replacing any previous file.
    pub fn write(&self, file_identifier: &str, content: &str) -> Result<PathBuf, BlueprintError> {
        let path = self.path_for(file_identifier);

        let result = if self.atomic {
            self.write_atomic(&path, content)
        } else {
            fs::write(&path, content)
        };

        match result {
            Ok(()) => {
                log::debug!("Wrote {} bytes to {}", content.len(), path.display());
                Ok(path)
            }
            Err(source) => {
                log::error!("Cannot write documentation file {}: {}", path.display(), source);
                Err(BlueprintError::Write { path, source })
            }
        }
    }

    fn write_atomic(&self, path: &Path, content: &str) -> std::io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
