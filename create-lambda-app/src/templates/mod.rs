//! Dispatch tables: which templates a configuration materializes.
//!
//! Every table is `'static` data; [`select`] only picks slices out of them
//! and never fails. Unknown option values are rejected earlier, while
//! parsing.

use std::borrow::Cow;

use scaffold_core::{Plan, PlannedFile, Source};

use crate::options::{Architecture, DeploymentTool, LambdaConfig, LambdaFeature};

/// Rendered entry: `template!("go.mod" => "common/go.mod")`.
macro_rules! template {
    ($path:literal => $file:literal) => {
        $crate::templates::TemplateEntry::render(
            $path,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $file)),
        )
    };
}

/// Entry copied as-is, for files whose own syntax collides with the
/// template markers (GitHub Actions `${{ }}` expressions).
macro_rules! verbatim {
    ($path:literal => $file:literal) => {
        $crate::templates::TemplateEntry::verbatim(
            $path,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $file)),
        )
    };
}

mod architecture;
mod common;
mod deployment;
mod features;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Render,
    Verbatim,
}

/// A relative output path paired with its template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub path: &'static str,
    pub source: &'static str,
    pub mode: RenderMode,
    pub executable: bool,
}

impl TemplateEntry {
    pub const fn render(path: &'static str, source: &'static str) -> Self {
        Self {
            path,
            source,
            mode: RenderMode::Render,
            executable: false,
        }
    }

    pub const fn verbatim(path: &'static str, source: &'static str) -> Self {
        Self {
            path,
            source,
            mode: RenderMode::Verbatim,
            executable: false,
        }
    }

    pub const fn executable(self) -> Self {
        Self {
            executable: true,
            ..self
        }
    }

    fn planned(&self) -> PlannedFile {
        let source = match self.mode {
            RenderMode::Render => Source::Template(Cow::Borrowed(self.source)),
            RenderMode::Verbatim => Source::Verbatim(Cow::Borrowed(self.source.as_bytes())),
        };
        PlannedFile {
            path: self.path.to_string(),
            source,
            executable: self.executable,
        }
    }
}

/// Directories and base files of one architecture style.
#[derive(Debug)]
pub struct Layout {
    pub dirs: &'static [&'static str],
    pub files: &'static [TemplateEntry],
}

pub fn layout(architecture: Architecture) -> &'static Layout {
    match architecture {
        Architecture::Clean => &architecture::CLEAN,
        Architecture::Simple => &architecture::SIMPLE,
        Architecture::Ddd => &architecture::DDD,
    }
}

/// Files every project gets.
pub fn common_files() -> &'static [TemplateEntry] {
    common::FILES
}

pub fn deployment_files(tool: DeploymentTool) -> &'static [TemplateEntry] {
    match tool {
        DeploymentTool::Sam => deployment::SAM,
        DeploymentTool::Cdk => deployment::CDK,
        DeploymentTool::Serverless => deployment::SERVERLESS,
        DeploymentTool::Terraform => deployment::TERRAFORM,
    }
}

/// Files added by `feature` for `architecture`. Features without files of
/// their own return an empty slice.
pub fn feature_files(feature: LambdaFeature, architecture: Architecture) -> &'static [TemplateEntry] {
    use Architecture::{Clean, Ddd, Simple};
    use LambdaFeature::{Api, Dynamodb, Sqs};

    match (feature, architecture) {
        (Api, Clean) => features::CLEAN_API,
        (Api, Simple) => features::SIMPLE_API,
        (Api, Ddd) => features::DDD_API,
        (Dynamodb, Clean) => features::CLEAN_DYNAMODB,
        (Dynamodb, Simple) => features::SIMPLE_DYNAMODB,
        (Dynamodb, Ddd) => features::DDD_DYNAMODB,
        (Sqs, Clean) => features::CLEAN_SQS,
        (Sqs, Simple) => features::SIMPLE_SQS,
        (Sqs, Ddd) => features::DDD_SQS,
        _ => &[],
    }
}

/// Build the plan for `config`: architecture base, common files,
/// deployment files, then feature files in feature order.
pub fn select(config: &LambdaConfig) -> Plan {
    let mut plan = Plan::new();
    let base = layout(config.architecture);
    for dir in base.dirs {
        plan.dir(*dir);
    }

    let features = config
        .features
        .iter()
        .flat_map(|f| feature_files(*f, config.architecture));

    base.files
        .iter()
        .chain(common_files())
        .chain(deployment_files(config.deployment))
        .chain(features)
        .for_each(|entry| {
            plan.file(entry.planned());
        });

    plan
}
