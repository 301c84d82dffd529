use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::naming::{to_camel_case, to_pascal_case, to_snake_case};
use crate::ScaffoldError;

/// Markers that must not survive rendering.
const UNRESOLVED_MARKERS: &[&str] = &["{{", "{%"];

/// Template engine shared by both generators.
///
/// Wraps a `minijinja` environment configured for source templates:
/// strict undefined behavior (a typo in a field name is an error, not an
/// empty string), trailing newlines kept, and block tags trimmed so that
/// `{% if %}` lines leave no blank line behind.
///
/// Templates are named after their output path, so auto-escaping is off for
/// every name: `package.json` and `template.yaml` get raw values, and
/// templates quote strings themselves (`tojson`) where needed.
///
/// Available filters: `pascal_case`, `snake_case`, `camel_case`.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("pascal_case", |value: String| to_pascal_case(&value));
        env.add_filter("snake_case", |value: String| to_snake_case(&value));
        env.add_filter("camel_case", |value: String| to_camel_case(&value));
        Self { env }
    }

    /// Render `source` against `ctx`. `path` names the output file in errors.
    pub fn render<C: Serialize>(
        &self,
        path: &str,
        source: &str,
        ctx: &C,
    ) -> Result<String, ScaffoldError> {
        let output = self
            .env
            .render_named_str(path, source, ctx)
            .map_err(|e| ScaffoldError::Template {
                path: path.to_string(),
                message: describe(&e),
            })?;
        check_resolved(path, &output)?;
        Ok(output)
    }
}

/// Fail if `output` still contains template markers.
pub fn check_resolved(path: &str, output: &str) -> Result<(), ScaffoldError> {
    for (idx, line) in output.lines().enumerate() {
        if UNRESOLVED_MARKERS.iter().any(|m| line.contains(m)) {
            return Err(ScaffoldError::UnresolvedPlaceholder {
                path: path.to_string(),
                line: idx + 1,
            });
        }
    }
    Ok(())
}

fn describe(err: &minijinja::Error) -> String {
    match err.line() {
        Some(line) => format!("{} (line {line})", err.kind()),
        None => err.kind().to_string(),
    }
}
