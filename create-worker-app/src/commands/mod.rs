//! Command implementations for the `create-worker-app` CLI.

/// Project scaffolding: `create-worker-app [name]`.
///
/// Resolves the configuration, writes the project tree, then optionally runs
/// `git init` and `<package-manager> install`.
pub mod new_project;
