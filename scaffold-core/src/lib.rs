//! # scaffold-core
//!
//! Shared generation pipeline used by `create-lambda-app` and
//! `create-worker-app`.
//!
//! A run goes through four stages:
//!
//! | Stage | Module |
//! |-------|--------|
//! | Resolve choices from flags, defaults and prompts | [`config`], [`choice`], [`prompt`] |
//! | Select the files to materialize | [`plan`] |
//! | Render and write them | [`render`], [`plan`], [`validate`] |
//! | Initialize git and install dependencies | [`post`] |
//!
//! Errors from every stage are reported through [`ScaffoldError`].

pub mod choice;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod naming;
pub mod plan;
pub mod post;
pub mod prompt;
pub mod render;
pub mod ui;
pub mod validate;

pub use choice::{parse_choice, parse_choice_list, Choice};
pub use config::Defaults;
pub use error::ScaffoldError;
pub use plan::{Plan, PlannedFile, Source};
pub use render::TemplateEngine;
