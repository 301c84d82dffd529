use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ScaffoldError;

/// Environment variable naming an explicit defaults file.
pub const CONFIG_ENV: &str = "SCAFFOLD_CONFIG";

/// Defaults file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "scaffold.yaml";

/// Dotenv file read from the working directory only; parents are not searched.
pub const LOCAL_ENV_FILE: &str = ".env";

const ENV_PREFIX: &str = "SCAFFOLD_";

/// User defaults for prompts and flags.
///
/// Resolution order (lowest to highest priority):
/// 1. built-in defaults of each tool
/// 2. YAML defaults file (`$SCAFFOLD_CONFIG`, `./scaffold.yaml`, or
///    `$HOME/.config/scaffold/defaults.yaml`, first one found)
/// 3. `.env` in the working directory (never overwrites set variables)
/// 4. `SCAFFOLD_*` environment variables (`SCAFFOLD_GITHUB_USER` ↔ `github-user`)
/// 5. command-line flags, applied by the tools themselves
///
/// Enum-valued keys stay as strings here; each tool parses them against its
/// own option sets so that an unknown value is reported with the list of
/// valid ones.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Defaults {
    pub author: Option<String>,
    pub github_user: Option<String>,
    pub description: Option<String>,
    pub architecture: Option<String>,
    pub deployment: Option<String>,
    pub testing: Option<String>,
    pub layout: Option<String>,
    pub package_manager: Option<String>,
    pub features: Option<Vec<String>>,
    pub skip_git: Option<bool>,
    pub skip_install: Option<bool>,
}

impl Defaults {
    /// Load defaults from the first defaults file found, then overlay
    /// `.env` and `SCAFFOLD_*` environment variables.
    pub fn load() -> Result<Self, ScaffoldError> {
        let _ = dotenvy::from_path(LOCAL_ENV_FILE);

        let mut defaults = match Self::locate() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading defaults file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        defaults.apply_env(std::env::vars())?;
        Ok(defaults)
    }

    /// Parse a YAML defaults document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ScaffoldError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ScaffoldError::Config(e.to_string()))
    }

    /// Read a YAML defaults file. A missing file yields empty defaults.
    pub fn from_file(path: &Path) -> Result<Self, ScaffoldError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScaffoldError::Config(format!("{}: {e}", path.display())))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| ScaffoldError::Config(format!("{}: {e}", path.display())))
    }

    /// Overlay `SCAFFOLD_*` variables. Unrelated variables are ignored;
    /// `SCAFFOLD_CONFIG` only names the file and is not a key.
    pub fn apply_env<I>(&mut self, vars: I) -> Result<(), ScaffoldError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let slot = match name {
                "AUTHOR" => &mut self.author,
                "GITHUB_USER" => &mut self.github_user,
                "DESCRIPTION" => &mut self.description,
                "ARCHITECTURE" => &mut self.architecture,
                "DEPLOYMENT" => &mut self.deployment,
                "TESTING" => &mut self.testing,
                "LAYOUT" => &mut self.layout,
                "PACKAGE_MANAGER" => &mut self.package_manager,
                "FEATURES" => {
                    self.features = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(str::to_string)
                            .collect(),
                    );
                    continue;
                }
                "SKIP_GIT" => {
                    self.skip_git = Some(parse_bool(&key, &value)?);
                    continue;
                }
                "SKIP_INSTALL" => {
                    self.skip_install = Some(parse_bool(&key, &value)?);
                    continue;
                }
                _ => continue,
            };
            *slot = Some(value);
        }
        Ok(())
    }

    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        let home = std::env::var_os("HOME")?;
        let user = PathBuf::from(home).join(".config/scaffold/defaults.yaml");
        user.exists().then_some(user)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ScaffoldError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ScaffoldError::Config(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}
