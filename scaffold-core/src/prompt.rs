//! Value resolution for the `new` flows: command-line flag first, then the
//! configured default, then an interactive `dialoguer` prompt (or the
//! built-in fallback when prompts are disabled).

use std::collections::BTreeSet;

use dialoguer::{Input, MultiSelect, Select};

use crate::{parse_choice, parse_choice_list, Choice, ScaffoldError};

/// Resolves each option of a configuration record.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    interactive: bool,
}

impl Resolver {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Free text. Prompts with `fallback` pre-filled when neither `flag`
    /// nor `configured` is set.
    pub fn text(
        &self,
        flag: Option<String>,
        configured: Option<String>,
        prompt: &str,
        fallback: String,
    ) -> Result<String, ScaffoldError> {
        if let Some(value) = flag.or(configured) {
            return Ok(value);
        }
        if self.interactive {
            return input(prompt, Some(fallback));
        }
        Ok(fallback)
    }

    /// One option out of a closed set.
    pub fn one<T: Choice>(
        &self,
        flag: Option<&str>,
        configured: Option<&str>,
        prompt: &str,
        fallback: T,
    ) -> Result<T, ScaffoldError> {
        if let Some(value) = flag.or(configured) {
            return parse_choice(value);
        }
        if self.interactive {
            return select(prompt, fallback);
        }
        Ok(fallback)
    }

    /// Any subset of a closed set. An empty `flags` slice counts as "not given".
    pub fn many<T: Choice + Ord>(
        &self,
        flags: &[String],
        configured: Option<&[String]>,
        prompt: &str,
        fallback: BTreeSet<T>,
    ) -> Result<BTreeSet<T>, ScaffoldError> {
        if !flags.is_empty() {
            return parse_choice_list(flags);
        }
        if let Some(values) = configured {
            return parse_choice_list(values);
        }
        if self.interactive {
            return multi_select(prompt, &fallback);
        }
        Ok(fallback)
    }

    /// Boolean switches are never prompted for.
    pub fn switch(&self, flag: bool, configured: Option<bool>) -> bool {
        flag || configured.unwrap_or(false)
    }
}

/// Free-text input with an optional pre-filled default.
pub fn input(prompt: &str, default: Option<String>) -> Result<String, ScaffoldError> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

/// Pick one option; items are shown as `"<id> (<description>)"`.
pub fn select<T: Choice>(prompt: &str, default: T) -> Result<T, ScaffoldError> {
    let labels: Vec<String> = T::ALL.iter().map(|c| c.prompt_label()).collect();
    let default_idx = T::ALL.iter().position(|c| *c == default).unwrap_or(0);
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default_idx)
        .interact()?;
    Ok(T::ALL[idx])
}

/// Pick any number of options, `defaults` pre-checked.
pub fn multi_select<T: Choice + Ord>(
    prompt: &str,
    defaults: &BTreeSet<T>,
) -> Result<BTreeSet<T>, ScaffoldError> {
    let labels: Vec<String> = T::ALL.iter().map(|c| c.prompt_label()).collect();
    let checked: Vec<bool> = T::ALL.iter().map(|c| defaults.contains(c)).collect();
    let picked = MultiSelect::new()
        .with_prompt(format!("{prompt} (space to toggle, enter to confirm)"))
        .items(&labels)
        .defaults(&checked)
        .interact()?;
    Ok(picked.into_iter().map(|i| T::ALL[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Tool {
        Sam,
        Cdk,
    }

    impl Choice for Tool {
        const KIND: &'static str = "tool";
        const ALL: &'static [Self] = &[Tool::Sam, Tool::Cdk];

        fn as_str(self) -> &'static str {
            match self {
                Tool::Sam => "sam",
                Tool::Cdk => "cdk",
            }
        }

        fn describe(self) -> &'static str {
            "test tool"
        }
    }

    #[test]
    fn flag_beats_configured() {
        let r = Resolver::new(false);
        assert_eq!(r.one(Some("cdk"), Some("sam"), "", Tool::Sam).unwrap(), Tool::Cdk);
    }

    #[test]
    fn configured_beats_fallback() {
        let r = Resolver::new(false);
        assert_eq!(r.one(None, Some("cdk"), "", Tool::Sam).unwrap(), Tool::Cdk);
    }

    #[test]
    fn fallback_without_prompt() {
        let r = Resolver::new(false);
        assert_eq!(r.one::<Tool>(None, None, "", Tool::Sam).unwrap(), Tool::Sam);
        assert_eq!(
            r.text(None, None, "", "default".to_string()).unwrap(),
            "default"
        );
    }

    #[test]
    fn unknown_configured_value_fails() {
        let r = Resolver::new(false);
        assert!(r.one(None, Some("pulumi"), "", Tool::Sam).is_err());
    }

    #[test]
    fn many_prefers_flags_over_configured() {
        let r = Resolver::new(false);
        let configured = vec!["sam".to_string()];
        let set = r
            .many(&["cdk".to_string()], Some(configured.as_slice()), "", BTreeSet::new())
            .unwrap();
        assert_eq!(set, BTreeSet::from([Tool::Cdk]));
    }

    #[test]
    fn many_configured_empty_list_means_none() {
        let r = Resolver::new(false);
        let configured: Vec<String> = Vec::new();
        let set = r
            .many::<Tool>(&[], Some(configured.as_slice()), "", BTreeSet::from([Tool::Sam]))
            .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn switch_combines_flag_and_configured() {
        let r = Resolver::new(false);
        assert!(r.switch(true, None));
        assert!(r.switch(false, Some(true)));
        assert!(!r.switch(false, None));
    }
}
