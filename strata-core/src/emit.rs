//! Ordered, root-anchored file emission with dry-run support.

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use log::debug;

use crate::file::{GeneratedFile, Overwrite, WriteResult, write_file};

/// One file handled by an [`Emitter`], in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    /// Path relative to the emitter root.
    pub path: PathBuf,
    /// What happened (or would happen) to the file.
    pub result: WriteResult,
}

/// Writes generated files below an explicit project root.
///
/// In dry-run mode nothing touches the file system: every file is recorded
/// as [`WriteResult::Planned`] (or [`WriteResult::Skipped`] for create-once
/// files that already exist), in the same order a real run would write them.
#[derive(Debug)]
pub struct Emitter {
    root: PathBuf,
    dry_run: bool,
    force: bool,
    emitted: Vec<Emitted>,
}

impl Emitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            force: false,
            emitted: Vec::new(),
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Overwrite create-once files as well.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Create directories (relative to the root) before any file is written.
    pub fn create_dirs(&mut self, dirs: &[PathBuf]) -> Result<()> {
        for dir in dirs {
            let path = self.root.join(dir);
            if self.dry_run {
                debug!("dry run: would create directory {}", path.display());
                continue;
            }
            debug!("creating directory {}", path.display());
            std::fs::create_dir_all(&path)
                .wrap_err_with(|| format!("failed to create directory '{}'", path.display()))?;
        }
        Ok(())
    }

    /// Emit one file, honouring its rules and the dry-run flag.
    pub fn emit(&mut self, file: &dyn GeneratedFile) -> Result<WriteResult> {
        let relative = file.path();
        let path = self.root.join(&relative);
        let create_once = file.rules().overwrite == Overwrite::IfMissing && !self.force;

        let result = if create_once && path.exists() {
            debug!("keeping existing {}", path.display());
            WriteResult::Skipped
        } else if self.dry_run {
            debug!("dry run: would write {}", path.display());
            WriteResult::Planned
        } else {
            debug!("writing {}", path.display());
            write_file(&path, &file.render())?;
            WriteResult::Written
        };

        self.emitted.push(Emitted {
            path: relative,
            result,
        });
        Ok(result)
    }

    /// Emit files in order, stopping at the first I/O error.
    pub fn emit_all(&mut self, files: &[Box<dyn GeneratedFile>]) -> Result<()> {
        for file in files {
            self.emit(file.as_ref())?;
        }
        Ok(())
    }

    pub fn finish(self) -> Vec<Emitted> {
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::file::File;

    fn files() -> Vec<Box<dyn GeneratedFile>> {
        vec![
            Box::new(File::new("lib/a.dart", "a")),
            Box::new(File::new("lib/b.dart", "b")),
        ]
    }

    #[test]
    fn test_emit_writes_in_order() {
        let temp = TempDir::new().unwrap();
        let mut emitter = Emitter::new(temp.path());

        emitter.emit_all(&files()).unwrap();

        let emitted = emitter.finish();
        assert_eq!(emitted[0].path, PathBuf::from("lib/a.dart"));
        assert_eq!(emitted[1].path, PathBuf::from("lib/b.dart"));
        assert!(emitted.iter().all(|e| e.result == WriteResult::Written));
        assert_eq!(fs::read_to_string(temp.path().join("lib/b.dart")).unwrap(), "b");
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let mut emitter = Emitter::new(temp.path()).dry_run(true);

        emitter.create_dirs(&[PathBuf::from("lib/core")]).unwrap();
        emitter.emit_all(&files()).unwrap();

        assert!(emitter.finish().iter().all(|e| e.result == WriteResult::Planned));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_force_overwrites_create_once_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app_en.arb"), "mine").unwrap();

        let mut emitter = Emitter::new(temp.path());
        let result = emitter.emit(&File::new("app_en.arb", "new").create_once()).unwrap();
        assert_eq!(result, WriteResult::Skipped);

        let mut emitter = Emitter::new(temp.path()).force(true);
        let result = emitter.emit(&File::new("app_en.arb", "new").create_once()).unwrap();
        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(temp.path().join("app_en.arb")).unwrap(), "new");
    }
}
