use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use scaffold_core::naming::validate_text_field;
use scaffold_core::{Choice, ScaffoldError};
use serde::Serialize;

/// How the worker source is organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkerLayout {
    Minimal,
    Modular,
}

impl Choice for WorkerLayout {
    const KIND: &'static str = "layout";
    const ALL: &'static [Self] = &[WorkerLayout::Minimal, WorkerLayout::Modular];

    fn as_str(self) -> &'static str {
        match self {
            WorkerLayout::Minimal => "minimal",
            WorkerLayout::Modular => "modular",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            WorkerLayout::Minimal => "Single router file",
            WorkerLayout::Modular => "Routes, middleware and services in separate modules",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkerDeployment {
    Wrangler,
    GithubActions,
}

impl Choice for WorkerDeployment {
    const KIND: &'static str = "deployment";
    const ALL: &'static [Self] = &[WorkerDeployment::Wrangler, WorkerDeployment::GithubActions];

    fn as_str(self) -> &'static str {
        match self {
            WorkerDeployment::Wrangler => "wrangler",
            WorkerDeployment::GithubActions => "github-actions",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            WorkerDeployment::Wrangler => "Deploy manually with wrangler deploy",
            WorkerDeployment::GithubActions => "Deploy from GitHub Actions on push to main",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkerTesting {
    Vitest,
    None,
}

impl Choice for WorkerTesting {
    const KIND: &'static str = "testing framework";
    const ALL: &'static [Self] = &[WorkerTesting::Vitest, WorkerTesting::None];

    fn as_str(self) -> &'static str {
        match self {
            WorkerTesting::Vitest => "vitest",
            WorkerTesting::None => "none",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            WorkerTesting::Vitest => "Vitest with the Workers runtime pool",
            WorkerTesting::None => "No test setup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Prefix for running a `package.json` script, e.g. `pnpm dev`.
    pub fn run_prefix(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun run",
        }
    }
}

impl Choice for PackageManager {
    const KIND: &'static str = "package manager";
    const ALL: &'static [Self] = &[
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    fn as_str(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "Yarn",
            PackageManager::Bun => "Bun",
        }
    }
}

/// Cloudflare bindings and triggers. Each one adds its own files and
/// toggles sections of `wrangler.toml` and the env type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkerFeature {
    Kv,
    D1,
    R2,
    Queues,
    Cron,
    Auth,
}

impl Choice for WorkerFeature {
    const KIND: &'static str = "feature";
    const ALL: &'static [Self] = &[
        WorkerFeature::Kv,
        WorkerFeature::D1,
        WorkerFeature::R2,
        WorkerFeature::Queues,
        WorkerFeature::Cron,
        WorkerFeature::Auth,
    ];

    fn as_str(self) -> &'static str {
        match self {
            WorkerFeature::Kv => "kv",
            WorkerFeature::D1 => "d1",
            WorkerFeature::R2 => "r2",
            WorkerFeature::Queues => "queues",
            WorkerFeature::Cron => "cron",
            WorkerFeature::Auth => "auth",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            WorkerFeature::Kv => "KV - Key-value cache",
            WorkerFeature::D1 => "D1 - SQLite database with migrations",
            WorkerFeature::R2 => "R2 - Object storage",
            WorkerFeature::Queues => "Queues - Producer and consumer",
            WorkerFeature::Cron => "Cron Triggers - Scheduled handler",
            WorkerFeature::Auth => "Auth - JWT bearer middleware",
        }
    }
}

/// Fully resolved choices for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub name: String,
    pub description: String,
    /// `author` field of the generated `package.json`; may be empty.
    pub author: String,
    pub layout: WorkerLayout,
    pub deployment: WorkerDeployment,
    pub testing: WorkerTesting,
    pub package_manager: PackageManager,
    pub features: BTreeSet<WorkerFeature>,
    pub skip_git: bool,
    pub skip_install: bool,
}

impl WorkerConfig {
    /// A configuration with the built-in defaults.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: default_description(&name),
            name,
            author: String::new(),
            layout: WorkerLayout::Modular,
            deployment: WorkerDeployment::Wrangler,
            testing: WorkerTesting::Vitest,
            package_manager: PackageManager::Npm,
            features: BTreeSet::new(),
            skip_git: true,
            skip_install: true,
        }
    }

    pub fn has(&self, feature: WorkerFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Check the free-text fields that are substituted into templates.
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        validate_text_field("description", &self.description)?;
        validate_text_field("author", &self.author)
    }

    /// Values visible to templates. `compatibility_date` pins the Workers
    /// runtime version in `wrangler.toml`.
    pub fn template_context(&self, compatibility_date: NaiveDate) -> TemplateContext<'_> {
        TemplateContext {
            name: &self.name,
            description: &self.description,
            author: &self.author,
            layout: self.layout.as_str(),
            deployment: self.deployment.as_str(),
            testing: self.testing.as_str(),
            package_manager: self.package_manager.as_str(),
            run: self.package_manager.run_prefix(),
            compatibility_date: compatibility_date.format("%Y-%m-%d").to_string(),
            features: WorkerFeature::ALL
                .iter()
                .map(|f| (f.as_str(), self.has(*f)))
                .collect(),
        }
    }

    /// Choices recorded in the `.create-worker-app` metadata file.
    pub fn recorded_choices(&self) -> RecordedChoices<'_> {
        RecordedChoices {
            name: &self.name,
            layout: self.layout.as_str(),
            deployment: self.deployment.as_str(),
            testing: self.testing.as_str(),
            package_manager: self.package_manager.as_str(),
            features: self.features.iter().map(|f| f.as_str()).collect(),
        }
    }
}

/// Template context; `features` holds every known feature.
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    pub layout: &'static str,
    pub deployment: &'static str,
    pub testing: &'static str,
    pub package_manager: &'static str,
    pub run: &'static str,
    pub compatibility_date: String,
    pub features: BTreeMap<&'static str, bool>,
}

#[derive(Debug, Serialize)]
pub struct RecordedChoices<'a> {
    pub name: &'a str,
    pub layout: &'static str,
    pub deployment: &'static str,
    pub testing: &'static str,
    pub package_manager: &'static str,
    pub features: Vec<&'static str>,
}

pub fn default_description(name: &str) -> String {
    format!("Cloudflare Worker for {name}")
}
