use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "info,scaffold_core=debug,create_lambda_app=debug,create_worker_app=debug";

/// Initialise the global `tracing` subscriber, writing to stderr.
///
/// Respects `RUST_LOG`. Otherwise only warnings are shown, or debug output
/// of the scaffold crates when `verbose` is set. User-facing progress is
/// printed separately on stdout.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
