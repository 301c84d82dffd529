use crate::ScaffoldError;

/// Lowercase the name and turn spaces into hyphens.
pub fn normalize_project_name(name: &str) -> String {
    name.trim().replace(' ', "-").to_lowercase()
}

/// Normalize `name` and check it against `^[a-z][a-z0-9-]*$`.
pub fn validate_project_name(name: &str) -> Result<String, ScaffoldError> {
    let normalized = normalize_project_name(name);
    let invalid = |reason: &str| ScaffoldError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = normalized.chars();
    match chars.next() {
        None => return Err(invalid("project name is required")),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(invalid("project name must start with a letter"))
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Err(invalid(
            "project name must contain only lowercase letters, numbers, and hyphens",
        ));
    }
    Ok(normalized)
}

/// Reject free text that would leave template markers in generated files.
pub fn validate_text_field(field: &'static str, value: &str) -> Result<(), ScaffoldError> {
    if ["{{", "{%"].iter().any(|m| value.contains(m)) {
        return Err(ScaffoldError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must not contain `{{` or `{%`".to_string(),
        });
    }
    Ok(())
}

/// Lowercase a git `user.name` into a path segment: `"Jane Doe"` → `"jane-doe"`.
pub fn to_handle(user: &str) -> String {
    normalize_project_name(user)
}

/// Convert PascalCase or kebab-case to snake_case.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::new();
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else if c == '-' || c == ' ' {
            result.push('_');
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert snake_case or kebab-case to PascalCase.
pub fn to_pascal_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert kebab-case or snake_case to camelCase.
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
