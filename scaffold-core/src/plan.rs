use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::render::TemplateEngine;
use crate::validate;
use crate::ScaffoldError;

/// Content of a planned file.
#[derive(Debug, Clone)]
pub enum Source {
    /// Rendered through the [`TemplateEngine`] before writing.
    Template(Cow<'static, str>),
    /// Written byte-for-byte.
    Verbatim(Cow<'static, [u8]>),
}

/// One output file of a [`Plan`].
#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    pub source: Source,
    /// Set mode `0755` after writing (Unix only).
    pub executable: bool,
}

/// The result of the dispatch stage: directories to create and files to
/// write, in order.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    dirs: Vec<String>,
    files: Vec<PlannedFile>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a directory that must exist even if no file lands in it.
    pub fn dir(&mut self, path: impl Into<String>) -> &mut Self {
        self.dirs.push(path.into());
        self
    }

    pub fn file(&mut self, file: PlannedFile) -> &mut Self {
        self.files.push(file);
        self
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Output paths in declaration order.
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }

    /// Fail if two entries target the same path.
    pub fn check_unique(&self) -> Result<(), ScaffoldError> {
        let mut seen = BTreeSet::new();
        for file in &self.files {
            if !seen.insert(file.path.as_str()) {
                return Err(ScaffoldError::DuplicatePath(file.path.clone()));
            }
        }
        Ok(())
    }

    /// Render the whole plan in memory, then write it under `project_dir`.
    ///
    /// Nothing touches the filesystem until every template has rendered and
    /// every manifest has parsed, so a bad template never leaves a partial
    /// tree behind. `project_dir` must not exist yet.
    ///
    /// Returns the paths written, relative to `project_dir`.
    pub fn materialize<C: Serialize>(
        &self,
        project_dir: &Path,
        engine: &TemplateEngine,
        ctx: &C,
    ) -> Result<Vec<String>, ScaffoldError> {
        if project_dir.exists() {
            return Err(ScaffoldError::DirectoryExists(project_dir.to_path_buf()));
        }
        self.check_unique()?;

        let mut rendered = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let bytes: Cow<'_, [u8]> = match &file.source {
                Source::Template(src) => {
                    Cow::Owned(engine.render(&file.path, src, ctx)?.into_bytes())
                }
                Source::Verbatim(bytes) => Cow::Borrowed(bytes.as_ref()),
            };
            validate::check_manifest(&file.path, &bytes)?;
            rendered.push((file, bytes));
        }

        create_dir(project_dir)?;
        for dir in &self.dirs {
            create_dir(&project_dir.join(dir))?;
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (file, bytes) in rendered {
            let target = project_dir.join(&file.path);
            if let Some(parent) = target.parent() {
                create_dir(parent)?;
            }
            fs::write(&target, &bytes).map_err(|source| ScaffoldError::Write {
                path: target.clone(),
                source,
            })?;
            if file.executable {
                make_executable(&target)?;
            }
            tracing::debug!(path = %file.path, bytes = bytes.len(), "wrote file");
            written.push(file.path.clone());
        }

        tracing::info!(
            dir = %project_dir.display(),
            files = written.len(),
            "project tree written"
        );
        Ok(written)
    }
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), ScaffoldError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        ScaffoldError::Write {
            path: PathBuf::from(path),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), ScaffoldError> {
    Ok(())
}
