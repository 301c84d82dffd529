//! Selection from the embedded template tree.
//!
//! `templates/` is compiled into the binary. Its top-level directories are
//! roots; a configuration picks `base/`, its layout, each enabled feature,
//! its testing setup and its deployment:
//!
//! ```text
//! templates/
//!   base/                     always
//!   layouts/<layout>/
//!   features/<feature>/       once per enabled feature
//!   testing/<testing>/        absent for `none`
//!   deploy/<deployment>/
//! ```
//!
//! Within a root, files ending in `.j2` are rendered (the suffix is dropped)
//! and all others are copied byte-for-byte. A path component starting with
//! `_` is written with a leading `.`, so `_github/workflows/deploy.yml`
//! becomes `.github/workflows/deploy.yml`.

use std::borrow::Cow;

use rust_embed::RustEmbed;
use scaffold_core::{Choice, Plan, PlannedFile, ScaffoldError, Source};

use crate::options::WorkerConfig;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

const TEMPLATE_SUFFIX: &str = ".j2";

/// Root directories for `config`, in the order their files are planned.
pub fn roots(config: &WorkerConfig) -> Vec<String> {
    let mut roots = vec![
        "base".to_string(),
        format!("layouts/{}", config.layout.as_str()),
    ];
    roots.extend(
        config
            .features
            .iter()
            .map(|f| format!("features/{}", f.as_str())),
    );
    roots.push(format!("testing/{}", config.testing.as_str()));
    roots.push(format!("deploy/{}", config.deployment.as_str()));
    roots
}

/// Map an embedded path relative to its root to the output path and
/// whether it is rendered.
pub fn output_path(relative: &str) -> (String, bool) {
    let (stem, render) = match relative.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stem) => (stem, true),
        None => (relative, false),
    };
    let path = stem
        .split('/')
        .map(|part| match part.strip_prefix('_') {
            Some(rest) => Cow::Owned(format!(".{rest}")),
            None => Cow::Borrowed(part),
        })
        .collect::<Vec<_>>()
        .join("/");
    (path, render)
}

/// Embedded files under `root/`, sorted, as paths relative to the root.
fn files_under(root: &str) -> Vec<String> {
    let prefix = format!("{root}/");
    let mut files: Vec<String> = Assets::iter()
        .filter_map(|path| path.strip_prefix(prefix.as_str()).map(str::to_string))
        .collect();
    files.sort();
    files
}

/// Build the plan for `config`. Fails only if a `.j2` file is not UTF-8.
pub fn select(config: &WorkerConfig) -> Result<Plan, ScaffoldError> {
    let mut plan = Plan::new();
    for root in roots(config) {
        for relative in files_under(&root) {
            let embedded_path = format!("{root}/{relative}");
            let Some(file) = Assets::get(&embedded_path) else {
                continue;
            };
            let (path, render) = output_path(&relative);
            tracing::debug!(root = %root, path = %path, render, "planned template");

            let source = if render {
                let text = String::from_utf8(file.data.into_owned()).map_err(|e| {
                    ScaffoldError::Template {
                        path: embedded_path.clone(),
                        message: e.to_string(),
                    }
                })?;
                Source::Template(Cow::Owned(text))
            } else {
                Source::Verbatim(file.data)
            };

            plan.file(PlannedFile {
                executable: path.ends_with(".sh"),
                path,
                source,
            });
        }
    }
    Ok(plan)
}
