use std::path::Path;
use std::process::Command;

use crate::naming::to_handle;
use crate::ScaffoldError;

/// `git init`, `git add .`, and an initial commit with `message`.
pub fn init_git(project_dir: &Path, message: &str) -> Result<(), ScaffoldError> {
    run(project_dir, "git", &["init"])?;
    run(project_dir, "git", &["add", "."])?;
    run(project_dir, "git", &["commit", "-m", message])
}

/// Run the dependency installer of the generated project.
pub fn install_dependencies(
    project_dir: &Path,
    program: &str,
    args: &[&str],
) -> Result<(), ScaffoldError> {
    run(project_dir, program, args)
}

/// `git config --get user.name`, lowercased with spaces turned into hyphens.
pub fn git_user_handle() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout);
    let name = name.trim();
    (!name.is_empty()).then(|| to_handle(name))
}

fn run(dir: &Path, program: &str, args: &[&str]) -> Result<(), ScaffoldError> {
    tracing::info!(program, ?args, dir = %dir.display(), "running");
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| ScaffoldError::Command {
            program: program.to_string(),
            message: e.to_string(),
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::Command {
            program: format!("{program} {}", args.join(" ")),
            message: status.to_string(),
        })
    }
}
