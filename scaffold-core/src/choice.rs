use std::collections::BTreeSet;

use crate::ScaffoldError;

/// A closed set of options selectable from the command line, a defaults
/// file, or an interactive prompt.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Human-readable name of the option set, used in error messages.
    const KIND: &'static str;
    /// Every variant, in prompt order.
    const ALL: &'static [Self];

    /// The short identifier accepted on the command line.
    fn as_str(self) -> &'static str;

    /// One-line description shown next to the identifier in prompts.
    fn describe(self) -> &'static str;

    /// `"<id> (<description>)"`, the text of a prompt item.
    fn prompt_label(self) -> String {
        format!("{} ({})", self.as_str(), self.describe())
    }
}

/// Parse a single option. Matching is case-insensitive and ignores
/// surrounding whitespace. Prompt labels are accepted too, since only the
/// first word is compared.
pub fn parse_choice<T: Choice>(value: &str) -> Result<T, ScaffoldError> {
    let key = value
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    T::ALL
        .iter()
        .copied()
        .find(|c| c.as_str() == key)
        .ok_or_else(|| ScaffoldError::UnknownValue {
            kind: T::KIND,
            value: value.to_string(),
            expected: T::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Parse a list of options. Each item may itself be comma-separated, so
/// `["api,sqs", "s3"]` yields three entries. Empty items are skipped.
pub fn parse_choice_list<T, I, S>(values: I) -> Result<BTreeSet<T>, ScaffoldError>
where
    T: Choice + Ord,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BTreeSet::new();
    for value in values {
        for item in value.as_ref().split(',') {
            let item = item.trim();
            if !item.is_empty() {
                out.insert(parse_choice::<T>(item)?);
            }
        }
    }
    Ok(out)
}
