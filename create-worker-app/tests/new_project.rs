use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use create_worker_app::commands::new_project::{self, CliNewOpts};
use create_worker_app::options::{
    PackageManager, WorkerConfig, WorkerDeployment, WorkerFeature, WorkerLayout, WorkerTesting,
};
use create_worker_app::templates;
use predicates::prelude::*;
use scaffold_core::prompt::Resolver;
use scaffold_core::{Choice, Defaults, ScaffoldError};
use serial_test::serial;
use tempfile::TempDir;
use walkdir::WalkDir;

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

fn all_features() -> BTreeSet<WorkerFeature> {
    WorkerFeature::ALL.iter().copied().collect()
}

fn non_interactive() -> CliNewOpts {
    CliNewOpts {
        no_interactive: true,
        skip_git: true,
        skip_install: true,
        ..CliNewOpts::default()
    }
}

fn relative_files(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn read(dir: &Path, path: &str) -> String {
    fs::read_to_string(dir.join(path)).unwrap_or_else(|e| panic!("{path}: {e}"))
}

// ── Generation ──────────────────────────────────────────────────────

#[test]
fn every_layout_and_deployment_generates() {
    for layout in WorkerLayout::ALL {
        for deployment in WorkerDeployment::ALL {
            for testing in WorkerTesting::ALL {
                let tmp = TempDir::new().unwrap();
                let config = WorkerConfig {
                    layout: *layout,
                    deployment: *deployment,
                    testing: *testing,
                    features: all_features(),
                    ..WorkerConfig::new("edge-api")
                };

                let dir = new_project::generate_project(&config, tmp.path())
                    .unwrap_or_else(|e| panic!("{layout:?}/{deployment:?}/{testing:?}: {e}"));

                let files = relative_files(&dir);
                assert!(files.contains("package.json"));
                assert!(files.contains("wrangler.toml"));
                assert!(files.contains("src/index.ts"));
                assert!(files.contains(".create-worker-app"));
                assert!(!files.iter().any(|f| f.ends_with(".j2")));
            }
        }
    }
}

#[test]
fn generation_is_deterministic_apart_from_metadata() {
    let config = WorkerConfig {
        features: all_features(),
        ..WorkerConfig::new("edge-api")
    };
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = new_project::generate_project(&config, first.path()).unwrap();
    let b = new_project::generate_project(&config, second.path()).unwrap();

    let files = relative_files(&a);
    assert_eq!(files, relative_files(&b));
    for path in files.iter().filter(|p| p.as_str() != ".create-worker-app") {
        assert_eq!(fs::read(a.join(path)).unwrap(), fs::read(b.join(path)).unwrap(), "{path}");
    }
}

#[test]
fn dotfiles_are_renamed() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        deployment: WorkerDeployment::GithubActions,
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    assert!(dir.join(".gitignore").is_file());
    assert!(dir.join(".dev.vars.example").is_file());
    assert!(dir.join(".github/workflows/deploy.yml").is_file());
    assert!(!dir.join("_gitignore").exists());
    assert!(!dir.join("_github").exists());
}

#[test]
fn no_template_markers_survive_outside_workflows() {
    for layout in WorkerLayout::ALL {
        let tmp = TempDir::new().unwrap();
        let config = WorkerConfig {
            layout: *layout,
            features: all_features(),
            ..WorkerConfig::new("edge-api")
        };
        let dir = new_project::generate_project(&config, tmp.path()).unwrap();

        for path in relative_files(&dir) {
            if path.starts_with(".github/") {
                continue;
            }
            let text = read(&dir, &path);
            assert!(!text.contains("{{"), "{path} contains an unresolved expression");
            assert!(!text.contains("{%"), "{path} contains an unresolved block");
        }
    }
}

#[test]
fn workflow_keeps_actions_expressions() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        deployment: WorkerDeployment::GithubActions,
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    let workflow = read(&dir, ".github/workflows/deploy.yml");
    assert!(workflow.contains("${{ secrets.CLOUDFLARE_API_TOKEN }}"));
}

#[test]
fn wrangler_deployment_has_no_workflow() {
    let tmp = TempDir::new().unwrap();
    let dir = new_project::generate_project(&WorkerConfig::new("edge-api"), tmp.path()).unwrap();
    assert!(!dir.join(".github").exists());
    assert!(read(&dir, "DEPLOYMENT.md").contains("wrangler"));
}

// ── Features and layouts ────────────────────────────────────────────

#[test]
fn feature_roots_add_their_files() {
    let cases = [
        (WorkerFeature::Kv, "src/services/cache.ts"),
        (WorkerFeature::D1, "migrations/0001_init.sql"),
        (WorkerFeature::R2, "src/services/storage.ts"),
        (WorkerFeature::Queues, "src/queues/consumer.ts"),
        (WorkerFeature::Cron, "src/scheduled.ts"),
        (WorkerFeature::Auth, "src/middleware/auth.ts"),
    ];
    for (feature, path) in cases {
        let with = WorkerConfig {
            features: BTreeSet::from([feature]),
            ..WorkerConfig::new("edge-api")
        };
        let without = WorkerConfig::new("edge-api");

        let with_paths: BTreeSet<String> =
            templates::select(&with).unwrap().paths().into_iter().map(String::from).collect();
        let without_paths: BTreeSet<String> = templates::select(&without)
            .unwrap()
            .paths()
            .into_iter()
            .map(String::from)
            .collect();

        assert!(with_paths.contains(path), "{feature:?} should add {path}");
        assert!(!without_paths.contains(path));
        assert!(without_paths.is_subset(&with_paths));
    }
}

#[test]
fn minimal_layout_is_a_single_router() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        layout: WorkerLayout::Minimal,
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    assert!(!dir.join("src/routes").exists());
    assert!(!dir.join("src/middleware").exists());
    assert!(read(&dir, "src/index.ts").contains("app.get('/health'"));
}

#[test]
fn modular_layout_wires_enabled_handlers() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        features: BTreeSet::from([WorkerFeature::Queues, WorkerFeature::Cron]),
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    let index = read(&dir, "src/index.ts");
    assert!(index.contains("queue: handleQueue,"));
    assert!(index.contains("scheduled: handleScheduled,"));
    assert!(index.contains("ExportedHandler<Env, QueueMessage>"));
    assert!(read(&dir, "src/env.ts").contains("QUEUE: Queue<QueueMessage>;"));
}

#[test]
fn testing_none_leaves_out_vitest() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        testing: WorkerTesting::None,
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    assert!(!dir.join("vitest.config.ts").exists());
    assert!(!dir.join("test").exists());
    let package: serde_json::Value = serde_json::from_str(&read(&dir, "package.json")).unwrap();
    assert!(package["scripts"].get("test").is_none());
    assert!(package["devDependencies"].get("vitest").is_none());
}

// ── Manifests ───────────────────────────────────────────────────────

#[test]
fn wrangler_toml_declares_bindings() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        features: all_features(),
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    let doc: toml_edit::DocumentMut = read(&dir, "wrangler.toml").parse().unwrap();
    assert_eq!(doc["name"].as_str(), Some("edge-api"));
    assert_eq!(doc["main"].as_str(), Some("src/index.ts"));

    let date = doc["compatibility_date"].as_str().unwrap();
    assert!(
        chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(),
        "bad compatibility date {date}"
    );

    assert_eq!(doc["kv_namespaces"][0]["binding"].as_str(), Some("CACHE"));
    assert_eq!(doc["d1_databases"][0]["binding"].as_str(), Some("DB"));
    assert_eq!(doc["r2_buckets"][0]["binding"].as_str(), Some("BUCKET"));
    assert_eq!(doc["queues"]["producers"][0]["binding"].as_str(), Some("QUEUE"));
    assert!(doc["triggers"]["crons"].is_array());
}

#[test]
fn package_json_escapes_description() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        description: "Edge \"API\" <fast>".to_string(),
        author: "Jane Doe".to_string(),
        package_manager: PackageManager::Pnpm,
        features: BTreeSet::from([WorkerFeature::D1]),
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    let package: serde_json::Value = serde_json::from_str(&read(&dir, "package.json")).unwrap();
    assert_eq!(package["name"], "edge-api");
    assert_eq!(package["description"], "Edge \"API\" <fast>");
    assert_eq!(package["author"], "Jane Doe");
    assert!(package["scripts"]["db:migrate"]
        .as_str()
        .unwrap()
        .contains("edge-api-db"));
    assert!(read(&dir, "README.md").contains("pnpm dev"));
}

#[test]
fn metadata_records_choices() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        layout: WorkerLayout::Minimal,
        package_manager: PackageManager::Bun,
        features: BTreeSet::from([WorkerFeature::R2, WorkerFeature::Kv]),
        ..WorkerConfig::new("edge-api")
    };
    let dir = new_project::generate_project(&config, tmp.path()).unwrap();

    let meta: serde_json::Value = serde_json::from_str(&read(&dir, ".create-worker-app")).unwrap();
    assert_eq!(meta["generator"], "create-worker-app");
    assert_eq!(meta["layout"], "minimal");
    assert_eq!(meta["package_manager"], "bun");
    assert_eq!(meta["features"], serde_json::json!(["kv", "r2"]));
}

// ── Failures ────────────────────────────────────────────────────────

#[test]
fn existing_directory_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let existing = tmp.path().join("edge-api");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("index.ts"), "mine").unwrap();

    let err = new_project::generate_project(&WorkerConfig::new("edge-api"), tmp.path()).unwrap_err();

    assert!(matches!(err, ScaffoldError::DirectoryExists(_)));
    assert_eq!(relative_files(&existing), BTreeSet::from(["index.ts".to_string()]));
    assert_eq!(fs::read_to_string(existing.join("index.ts")).unwrap(), "mine");
}

// ── Resolution ──────────────────────────────────────────────────────

#[test]
fn resolve_applies_built_in_defaults() {
    let cli = CliNewOpts {
        name: Some("Edge API".into()),
        ..non_interactive()
    };
    let config = new_project::resolve(cli, &Defaults::default(), Resolver::new(false)).unwrap();

    assert_eq!(config.name, "edge-api");
    assert_eq!(config.description, "Cloudflare Worker for edge-api");
    assert_eq!(config.layout, WorkerLayout::Modular);
    assert_eq!(config.deployment, WorkerDeployment::Wrangler);
    assert_eq!(config.testing, WorkerTesting::Vitest);
    assert_eq!(config.package_manager, PackageManager::Npm);
    assert!(config.features.is_empty());
    assert!(config.author.is_empty());
}

#[test]
fn resolve_reads_configured_defaults() {
    let defaults = Defaults::from_yaml_str(
        "author: Jane Doe\nlayout: minimal\npackage-manager: yarn\nfeatures: [kv, cron]\n",
    )
    .unwrap();
    let cli = CliNewOpts {
        name: Some("edge-api".into()),
        package_manager: Some("bun".into()),
        ..non_interactive()
    };
    let config = new_project::resolve(cli, &defaults, Resolver::new(false)).unwrap();

    assert_eq!(config.author, "Jane Doe");
    assert_eq!(config.layout, WorkerLayout::Minimal);
    assert_eq!(config.package_manager, PackageManager::Bun);
    assert_eq!(
        config.features,
        BTreeSet::from([WorkerFeature::Kv, WorkerFeature::Cron])
    );
}

#[test]
fn resolve_rejects_unknown_layout() {
    let cli = CliNewOpts {
        name: Some("edge-api".into()),
        layout: Some("hexagonal".into()),
        ..non_interactive()
    };
    let err = new_project::resolve(cli, &Defaults::default(), Resolver::new(false)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown layout 'hexagonal'. Available: minimal, modular"
    );
}

#[test]
fn resolve_rejects_template_markers_in_description() {
    let cli = CliNewOpts {
        name: Some("edge-api".into()),
        description: Some("Renders {{user}} greetings".into()),
        ..non_interactive()
    };
    let err = new_project::resolve(cli, &Defaults::default(), Resolver::new(false)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid description 'Renders {{user}} greetings': must not contain `{{` or `{%`"
    );
}

#[test]
fn generate_rejects_template_markers_in_author() {
    let tmp = TempDir::new().unwrap();
    let config = WorkerConfig {
        author: "{% raw %}".to_string(),
        ..WorkerConfig::new("edge-api")
    };
    let err = new_project::generate_project(&config, tmp.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::InvalidValue { field: "author", .. }));
    assert!(!tmp.path().join("edge-api").exists());
}

// ── End to end ──────────────────────────────────────────────────────

#[test]
#[serial]
fn run_creates_project_in_current_directory() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    new_project::run(CliNewOpts {
        name: Some("edge-api".into()),
        features: vec!["kv".into()],
        ..non_interactive()
    })
    .unwrap();

    assert!(Path::new("edge-api/src/services/cache.ts").is_file());
    assert!(!Path::new("edge-api/.git").exists());
}

/// The binary run from `dir`, with `HOME` pointed at `dir` and no
/// `SCAFFOLD_*` variables inherited from the test environment.
fn binary(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-worker-app").unwrap();
    cmd.current_dir(dir).env("HOME", dir);
    for (key, _) in std::env::vars().filter(|(k, _)| k.starts_with("SCAFFOLD_")) {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn binary_generates_with_yes() {
    let tmp = TempDir::new().unwrap();
    binary(tmp.path())
        .args([
            "edge-api",
            "--yes",
            "--skip-git",
            "--skip-install",
            "--features",
            "d1,queues",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created project"));

    assert!(tmp.path().join("edge-api/migrations/0001_init.sql").is_file());
}

#[test]
fn binary_fails_on_unknown_feature() {
    let tmp = TempDir::new().unwrap();
    binary(tmp.path())
        .args(["edge-api", "--yes", "--features", "durable-objects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown feature 'durable-objects'"));

    assert!(!tmp.path().join("edge-api").exists());
}

#[test]
fn binary_fails_on_existing_directory() {
    let tmp = TempDir::new().unwrap();
    let existing = tmp.path().join("edge-api");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("wrangler.toml"), "name = \"mine\"\n").unwrap();

    binary(tmp.path())
        .args(["edge-api", "--yes", "--skip-git", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory 'edge-api' already exists"));

    assert_eq!(relative_files(&existing), BTreeSet::from(["wrangler.toml".to_string()]));
    assert_eq!(read(&existing, "wrangler.toml"), "name = \"mine\"\n");
}

#[test]
fn binary_reads_dotenv_from_working_directory_only() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env"), "SCAFFOLD_PACKAGE_MANAGER=pnpm\n").unwrap();
    let nested = tmp.path().join("nested");
    fs::create_dir(&nested).unwrap();

    binary(tmp.path())
        .args(["edge-api", "--yes", "--skip-git", "--skip-install"])
        .assert()
        .success();
    binary(&nested)
        .args(["edge-api", "--yes", "--skip-git", "--skip-install"])
        .assert()
        .success();

    let here: serde_json::Value =
        serde_json::from_str(&read(&tmp.path().join("edge-api"), ".create-worker-app")).unwrap();
    let below: serde_json::Value =
        serde_json::from_str(&read(&nested.join("edge-api"), ".create-worker-app")).unwrap();
    assert_eq!(here["package_manager"], "pnpm");
    assert_eq!(below["package_manager"], "npm");
}
