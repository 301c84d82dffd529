//! # create-worker-app
//!
//! Scaffolds Cloudflare Worker projects written in TypeScript on Hono.
//!
//! | Choice | Options |
//! |--------|---------|
//! | Layout | `minimal`, `modular` |
//! | Deployment | `wrangler`, `github-actions` |
//! | Testing | `vitest`, `none` |
//! | Package manager | `npm`, `pnpm`, `yarn`, `bun` |
//! | Features | `kv`, `d1`, `r2`, `queues`, `cron`, `auth` |
//!
//! Templates live in an embedded tree under `templates/`; see [`templates`]
//! for how a configuration selects from it.

pub mod commands;
pub mod options;
pub mod templates;

/// Version recorded in generated metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the metadata file written at the project root.
pub const METADATA_FILE: &str = ".create-worker-app";
