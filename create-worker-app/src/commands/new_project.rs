use std::collections::BTreeSet;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use scaffold_core::metadata::Metadata;
use scaffold_core::naming::validate_project_name;
use scaffold_core::prompt::{self, Resolver};
use scaffold_core::{post, ui, Choice, Defaults, ScaffoldError, TemplateEngine};

use crate::options::{
    default_description, PackageManager, WorkerConfig, WorkerDeployment, WorkerFeature,
    WorkerLayout, WorkerTesting,
};
use crate::{templates, METADATA_FILE, VERSION};

const GENERATOR: &str = "create-worker-app";

/// Raw CLI flags, before resolution into [`WorkerConfig`].
#[derive(Debug, Clone, Default)]
pub struct CliNewOpts {
    pub name: Option<String>,
    pub description: Option<String>,
    pub layout: Option<String>,
    pub deployment: Option<String>,
    pub testing: Option<String>,
    pub features: Vec<String>,
    pub package_manager: Option<String>,
    pub skip_git: bool,
    pub skip_install: bool,
    pub no_interactive: bool,
}

/// Create a new Worker project in the current directory.
///
/// Resolution order per option: flag, user defaults, prompt (or built-in
/// default when prompts are off).
pub fn run(cli_opts: CliNewOpts) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("{}", "Create Worker App".bold());
    println!("{}", "   Cloudflare Worker project generator".cyan());
    println!();

    let defaults = Defaults::load()?;
    let interactive = !cli_opts.no_interactive && std::io::stdin().is_terminal();
    let config = resolve(cli_opts, &defaults, Resolver::new(interactive))?;

    let project_dir = generate_project(&config, Path::new("."))?;
    post_generate(&config, &project_dir);
    print_next_steps(&config);
    Ok(())
}

/// Turn flags and defaults into a [`WorkerConfig`], prompting through
/// `resolver` for anything still missing.
pub fn resolve(
    cli: CliNewOpts,
    defaults: &Defaults,
    resolver: Resolver,
) -> Result<WorkerConfig, ScaffoldError> {
    let raw_name = match cli.name {
        Some(name) => name,
        None if resolver.is_interactive() => prompt::input("Project name", None)?,
        None => String::new(),
    };
    let name = validate_project_name(&raw_name)?;

    let description = resolver.text(
        cli.description,
        defaults.description.clone(),
        "Project description",
        default_description(&name),
    )?;

    let layout = resolver.one(
        cli.layout.as_deref(),
        defaults.layout.as_deref(),
        "Choose project layout",
        WorkerLayout::Modular,
    )?;

    let features = resolver.many(
        &cli.features,
        defaults.features.as_deref(),
        "Select bindings to include",
        BTreeSet::new(),
    )?;

    let deployment = resolver.one(
        cli.deployment.as_deref(),
        defaults.deployment.as_deref(),
        "Choose deployment",
        WorkerDeployment::Wrangler,
    )?;

    let testing = resolver.one(
        cli.testing.as_deref(),
        defaults.testing.as_deref(),
        "Choose testing setup",
        WorkerTesting::Vitest,
    )?;

    let package_manager = resolver.one(
        cli.package_manager.as_deref(),
        defaults.package_manager.as_deref(),
        "Choose package manager",
        PackageManager::Npm,
    )?;

    let config = WorkerConfig {
        skip_git: resolver.switch(cli.skip_git, defaults.skip_git),
        skip_install: resolver.switch(cli.skip_install, defaults.skip_install),
        author: defaults.author.clone().unwrap_or_default(),
        name,
        description,
        layout,
        deployment,
        testing,
        package_manager,
        features,
    };
    config.validate()?;
    Ok(config)
}

/// Write the project tree for `config` under `parent/<name>` and return
/// its path. Fails without writing anything if the directory exists or a
/// free-text field contains template markers.
pub fn generate_project(config: &WorkerConfig, parent: &Path) -> Result<PathBuf, ScaffoldError> {
    config.validate()?;
    let project_dir = parent.join(&config.name);
    if project_dir.exists() {
        return Err(ScaffoldError::DirectoryExists(PathBuf::from(&config.name)));
    }

    ui::step("Creating project structure...");
    tracing::info!(
        name = %config.name,
        layout = ?config.layout,
        deployment = ?config.deployment,
        features = ?config.features,
        "generating worker project"
    );

    let now = Utc::now();
    let plan = templates::select(config)?;
    let engine = TemplateEngine::new();
    plan.materialize(&project_dir, &engine, &config.template_context(now.date_naive()))?;

    Metadata::new(GENERATOR, VERSION, now, config.recorded_choices())
        .write(&project_dir, METADATA_FILE)?;

    Ok(project_dir)
}

fn post_generate(config: &WorkerConfig, project_dir: &Path) {
    if !config.skip_git {
        ui::step("Initializing git repository...");
        if let Err(e) = post::init_git(project_dir, "Initial commit from create-worker-app") {
            tracing::warn!(error = %e, "git initialization failed");
            ui::warning(&format!("Failed to initialize git: {e}"));
        }
    }

    if !config.skip_install {
        let pm = config.package_manager.as_str();
        ui::step(&format!("Installing dependencies with {pm}..."));
        if let Err(e) = post::install_dependencies(project_dir, pm, &["install"]) {
            tracing::warn!(error = %e, "dependency installation failed");
            ui::warning(&format!("Failed to install dependencies: {e}"));
        }
    }
}

fn print_next_steps(config: &WorkerConfig) {
    let pm = config.package_manager;
    let run = pm.run_prefix();

    println!();
    println!(
        "{} {}",
        "Successfully created project:".green(),
        config.name.bold()
    );
    println!();
    println!("{}", "Next steps:".bold());
    println!("  cd {}", config.name);
    if config.skip_install {
        println!("  {} install", pm.as_str());
    }
    println!("  {run} dev");
    println!();
    println!("{}", "Available commands:".bold());
    ui::hint(&format!("{run} dev"), "Start the local dev server");
    if config.testing == WorkerTesting::Vitest {
        ui::hint(&format!("{run} test"), "Run tests");
    }
    ui::hint(&format!("{run} deploy"), "Deploy with wrangler");
    if config.has(WorkerFeature::D1) {
        ui::hint(&format!("{run} db:migrate"), "Apply D1 migrations locally");
    }
    println!();
}
