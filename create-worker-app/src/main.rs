use clap::Parser;
use create_worker_app::commands::new_project::{self, CliNewOpts};
use scaffold_core::{logging, ui};

#[derive(Parser)]
#[command(
    name = "create-worker-app",
    version,
    about = "Create a new Cloudflare Worker project",
    long_about = "Create a new Cloudflare Worker project.\n\n\
        Generates a TypeScript worker on Hono with optional KV, D1, R2, \
        Queues, Cron and auth support, wrangler configuration, Vitest tests, \
        and an optional GitHub Actions deploy workflow."
)]
struct Cli {
    /// Project name
    #[arg(value_name = "PROJECT_NAME")]
    project_name: Option<String>,

    /// Project name (alternative to the positional argument)
    #[arg(short, long, conflicts_with = "project_name")]
    name: Option<String>,

    /// Project description
    #[arg(short, long)]
    description: Option<String>,

    /// Source layout (minimal, modular)
    #[arg(long)]
    layout: Option<String>,

    /// Deployment (wrangler, github-actions)
    #[arg(long)]
    deployment: Option<String>,

    /// Testing setup (vitest, none)
    #[arg(long)]
    testing: Option<String>,

    /// Bindings to include (kv,d1,r2,queues,cron,auth)
    #[arg(short, long, value_delimiter = ',')]
    features: Vec<String>,

    /// Package manager (npm, pnpm, yarn, bun)
    #[arg(long)]
    package_manager: Option<String>,

    /// Skip git initialization
    #[arg(long)]
    skip_git: bool,

    /// Skip dependency installation
    #[arg(long)]
    skip_install: bool,

    /// Never prompt; use defaults for anything not given
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let opts = CliNewOpts {
        name: cli.project_name.or(cli.name),
        description: cli.description,
        layout: cli.layout,
        deployment: cli.deployment,
        testing: cli.testing,
        features: cli.features,
        package_manager: cli.package_manager,
        skip_git: cli.skip_git,
        skip_install: cli.skip_install,
        no_interactive: cli.yes,
    };

    if let Err(e) = new_project::run(opts) {
        ui::error(&*e);
        std::process::exit(1);
    }
}
