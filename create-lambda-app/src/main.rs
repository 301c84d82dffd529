use clap::Parser;
use create_lambda_app::commands::new_project::{self, CliNewOpts};
use scaffold_core::{logging, ui};

#[derive(Parser)]
#[command(
    name = "create-lambda-app",
    version,
    about = "Create a new Go Lambda function project",
    long_about = "Create a new Go Lambda function project.\n\n\
        Generates a structured project (Clean, Simple, or DDD layout) with \
        multi-environment configuration, tests, CI workflows, API docs, and \
        SAM/CDK/Serverless/Terraform deployment files."
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

    /// Deployment tool (sam, cdk, serverless, terraform)
    #[arg(long)]
    deployment: Option<String>,

    /// Project structure (clean, simple, ddd)
    #[arg(long)]
    architecture: Option<String>,

    /// Testing approach (testify, standard, ginkgo)
    #[arg(long)]
    testing: Option<String>,

    /// Features to include (api,dynamodb,sqs,sns,s3,cognito,secrets,eventbridge,stepfunctions)
    #[arg(short, long, value_delimiter = ',')]
    features: Vec<String>,

    /// Go module path (default: github.com/<git user>/<name>)
    #[arg(long)]
    module: Option<String>,

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
        deployment: cli.deployment,
        architecture: cli.architecture,
        testing: cli.testing,
        features: cli.features,
        module: cli.module,
        skip_git: cli.skip_git,
        skip_install: cli.skip_install,
        no_interactive: cli.yes,
    };

    if let Err(e) = new_project::run(opts) {
        ui::error(&*e);
        std::process::exit(1);
    }
}
