//! # create-lambda-app
//!
//! Scaffolds AWS Lambda projects written in Go.
//!
//! | Choice | Options |
//! |--------|---------|
//! | Architecture | `clean`, `simple`, `ddd` |
//! | Deployment | `sam`, `cdk`, `serverless`, `terraform` |
//! | Testing | `testify`, `standard`, `ginkgo` |
//! | Features | `api`, `dynamodb`, `sqs`, `sns`, `s3`, `cognito`, `secrets`, `eventbridge`, `stepfunctions` |
//!
//! ## Architecture
//!
//! - [`options`]: the option sets and the resolved [`options::LambdaConfig`]
//! - [`templates`]: dispatch tables from a configuration to template files
//! - [`commands::new_project`]: flag/prompt resolution, generation, and
//!   post-generation steps

pub mod commands;
pub mod options;
pub mod templates;

/// Version recorded in generated metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the metadata file written at the project root.
pub const METADATA_FILE: &str = ".create-lambda-app";
