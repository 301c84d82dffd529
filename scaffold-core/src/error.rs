use std::path::PathBuf;

/// Error type for every stage of a generation run.
///
/// All variants are terminal for the current run. Subprocess failures
/// ([`ScaffoldError::Command`]) are the only ones the CLIs downgrade to a
/// warning, since the project tree is already on disk when they happen.
#[derive(Debug)]
pub enum ScaffoldError {
    /// The project name does not satisfy `^[a-z][a-z0-9-]*$` after normalization.
    InvalidName { name: String, reason: String },
    /// A free-text option (description, module path, author) cannot be
    /// written into the templates as given.
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
    /// The target directory already exists. Nothing has been written.
    DirectoryExists(PathBuf),
    /// A string could not be parsed into one of the closed option sets.
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: String,
    },
    /// Two plan entries resolve to the same output path.
    DuplicatePath(String),
    /// Template syntax or evaluation error.
    Template { path: String, message: String },
    /// Rendered output still contains template markers.
    UnresolvedPlaceholder { path: String, line: usize },
    /// A generated JSON/TOML/YAML file does not parse.
    InvalidManifest { path: String, reason: String },
    /// The defaults file or a `SCAFFOLD_*` variable is malformed.
    Config(String),
    /// Filesystem failure while writing the project tree.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A post-generation subprocess could not be run or exited non-zero.
    Command { program: String, message: String },
    /// An interactive prompt was aborted or the terminal is unusable.
    Prompt(String),
    Io(std::io::Error),
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::InvalidName { name, reason } => {
                write!(f, "Invalid project name '{name}': {reason}")
            }
            ScaffoldError::InvalidValue {
                field,
                value,
                reason,
            } => write!(f, "Invalid {field} '{value}': {reason}"),
            ScaffoldError::DirectoryExists(path) => {
                write!(f, "Directory '{}' already exists", path.display())
            }
            ScaffoldError::UnknownValue {
                kind,
                value,
                expected,
            } => write!(f, "Unknown {kind} '{value}'. Available: {expected}"),
            ScaffoldError::DuplicatePath(path) => {
                write!(f, "Template output '{path}' is declared more than once")
            }
            ScaffoldError::Template { path, message } => {
                write!(f, "Failed to render template for {path}: {message}")
            }
            ScaffoldError::UnresolvedPlaceholder { path, line } => {
                write!(f, "Unresolved placeholder in {path} at line {line}")
            }
            ScaffoldError::InvalidManifest { path, reason } => {
                write!(f, "Generated file {path} is not valid: {reason}")
            }
            ScaffoldError::Config(msg) => write!(f, "Config error: {msg}"),
            ScaffoldError::Write { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
            ScaffoldError::Command { program, message } => {
                write!(f, "`{program}` failed: {message}")
            }
            ScaffoldError::Prompt(msg) => write!(f, "Prompt failed: {msg}"),
            ScaffoldError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Write { source, .. } => Some(source),
            ScaffoldError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        ScaffoldError::Io(err)
    }
}

impl From<dialoguer::Error> for ScaffoldError {
    fn from(err: dialoguer::Error) -> Self {
        ScaffoldError::Prompt(err.to_string())
    }
}

impl From<minijinja::Error> for ScaffoldError {
    fn from(err: minijinja::Error) -> Self {
        ScaffoldError::Template {
            path: err.name().unwrap_or("<inline>").to_string(),
            message: err.to_string(),
        }
    }
}
