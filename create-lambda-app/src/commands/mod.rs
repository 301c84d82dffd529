//! Command implementations for the `create-lambda-app` CLI.

/// Project scaffolding: `create-lambda-app [name]`.
///
/// Resolves the configuration from flags, defaults and prompts, writes the
/// project tree, then optionally runs `git init` and `go mod download`.
pub mod new_project;
