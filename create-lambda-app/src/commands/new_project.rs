use std::collections::BTreeSet;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use scaffold_core::metadata::Metadata;
use scaffold_core::naming::validate_project_name;
use scaffold_core::prompt::{self, Resolver};
use scaffold_core::{post, ui, Defaults, ScaffoldError, TemplateEngine};

use crate::options::{
    default_description, default_module, Architecture, DeploymentTool, LambdaConfig,
    LambdaFeature, TestingFramework,
};
use crate::{templates, METADATA_FILE, VERSION};

const GENERATOR: &str = "create-lambda-app";

/// Raw CLI flags, before resolution into [`LambdaConfig`].
#[derive(Debug, Clone, Default)]
pub struct CliNewOpts {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deployment: Option<String>,
    pub architecture: Option<String>,
    pub testing: Option<String>,
    pub features: Vec<String>,
    pub module: Option<String>,
    pub skip_git: bool,
    pub skip_install: bool,
    pub no_interactive: bool,
}

/// Create a new Lambda project in the current directory.
///
/// Each option is taken from `cli_opts` first, then from the user defaults
/// ([`Defaults::load`]), then asked for interactively. Prompts are skipped
/// with `--yes` or when stdin is not a terminal; built-in defaults apply
/// then.
///
/// Git and dependency installation failures are reported as warnings; the
/// project tree is already complete at that point.
pub fn run(cli_opts: CliNewOpts) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("{}", "Create Lambda App".bold());
    println!("{}", "   Go Lambda function project generator".cyan());
    println!();

    let defaults = Defaults::load()?;
    let interactive = !cli_opts.no_interactive && std::io::stdin().is_terminal();
    let config = resolve(cli_opts, &defaults, Resolver::new(interactive), post::git_user_handle)?;

    let project_dir = generate_project(&config, Path::new("."))?;
    post_generate(&config, &project_dir);
    print_next_steps(&config);
    Ok(())
}

/// Turn flags and defaults into a [`LambdaConfig`], prompting through
/// `resolver` for anything still missing. `git_user` is only called when
/// neither `--module` nor a configured GitHub user is available.
pub fn resolve(
    cli: CliNewOpts,
    defaults: &Defaults,
    resolver: Resolver,
    git_user: impl FnOnce() -> Option<String>,
) -> Result<LambdaConfig, ScaffoldError> {
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

    let deployment = resolver.one(
        cli.deployment.as_deref(),
        defaults.deployment.as_deref(),
        "Choose deployment tool",
        DeploymentTool::Sam,
    )?;

    let features = resolver.many(
        &cli.features,
        defaults.features.as_deref(),
        "Select features to include",
        BTreeSet::from([LambdaFeature::Api]),
    )?;

    let architecture = resolver.one(
        cli.architecture.as_deref(),
        defaults.architecture.as_deref(),
        "Choose project structure",
        Architecture::Clean,
    )?;

    let testing = resolver.one(
        cli.testing.as_deref(),
        defaults.testing.as_deref(),
        "Choose testing approach",
        TestingFramework::Testify,
    )?;

    let module = match cli.module {
        Some(module) => module,
        None => {
            let user = defaults.github_user.clone().or_else(git_user);
            default_module(user.as_deref(), &name)
        }
    };

    let config = LambdaConfig {
        skip_git: resolver.switch(cli.skip_git, defaults.skip_git),
        skip_install: resolver.switch(cli.skip_install, defaults.skip_install),
        name,
        description,
        module,
        architecture,
        deployment,
        testing,
        features,
    };
    config.validate()?;
    Ok(config)
}

/// Write the project tree for `config` under `parent/<name>` and return
/// its path. Fails without writing anything if the directory exists or a
/// free-text field contains template markers.
pub fn generate_project(config: &LambdaConfig, parent: &Path) -> Result<PathBuf, ScaffoldError> {
    config.validate()?;
    let project_dir = parent.join(&config.name);
    if project_dir.exists() {
        return Err(ScaffoldError::DirectoryExists(PathBuf::from(&config.name)));
    }

    ui::step("Creating project structure...");
    tracing::info!(
        name = %config.name,
        architecture = ?config.architecture,
        deployment = ?config.deployment,
        features = ?config.features,
        "generating lambda project"
    );

    let plan = templates::select(config);
    let engine = TemplateEngine::new();
    plan.materialize(&project_dir, &engine, &config.template_context())?;

    Metadata::new(GENERATOR, VERSION, Utc::now(), config.recorded_choices())
        .write(&project_dir, METADATA_FILE)?;

    Ok(project_dir)
}

fn post_generate(config: &LambdaConfig, project_dir: &Path) {
    if !config.skip_git {
        ui::step("Initializing git repository...");
        if let Err(e) = post::init_git(project_dir, "Initial commit from create-lambda-app") {
            tracing::warn!(error = %e, "git initialization failed");
            ui::warning(&format!("Failed to initialize git: {e}"));
        }
    }

    if !config.skip_install {
        ui::step("Installing dependencies...");
        if let Err(e) = post::install_dependencies(project_dir, "go", &["mod", "download"]) {
            tracing::warn!(error = %e, "dependency installation failed");
            ui::warning(&format!("Failed to install dependencies: {e}"));
        }
    }
}

fn print_next_steps(config: &LambdaConfig) {
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
        println!("  go mod download");
    }
    println!("  make test");
    println!("  make run-local");
    println!();
    println!("{}", "Available commands:".bold());
    ui::hint("make generate-handler", "Generate new Lambda handlers");
    ui::hint("make build", "Build all Lambda functions");
    ui::hint("make test", "Run tests with coverage");
    ui::hint("make deploy-dev", "Deploy to development");
    ui::hint("make deploy-prod", "Deploy to production");
    println!();
    println!("{}", "Documentation:".bold());
    ui::hint("README.md", "Project overview and setup");
    ui::hint("docs/ARCHITECTURE.md", "Architecture decisions");
    ui::hint("docs/DEPLOYMENT.md", "Deployment guide");
    println!();
}
