// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message templates and placeholder substitution.
//!
//! A template is plain text with zero or more `{identifier}` placeholders.
//! Identifiers follow `[A-Za-z_][A-Za-z0-9_]*`; any other brace sequence is
//! literal text. Substitution is single-pass, so a value that itself looks
//! like `{name}` is inserted verbatim and never expanded again.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// What to do when a template placeholder has no matching argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingParameterPolicy {
    /// Fail with `MissingParameter`.
    #[default]
    Error,
    /// Substitute an empty string.
    Empty,
    /// Leave the `{name}` token in the output.
    Keep,
}

/// One named substitution value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArg {
    pub name: String,
    pub value: String,
}

impl MessageArg {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    placeholders: Vec<String>,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut placeholders: Vec<String> = Vec::new();
        for caps in placeholder_pattern().captures_iter(&source) {
            let name = &caps[1];
            if !placeholders.iter().any(|p| p == name) {
                placeholders.push(name.to_string());
            }
        }
        Self {
            source,
            placeholders,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder identifiers in order of first appearance, without duplicates.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn placeholder_set(&self) -> BTreeSet<&str> {
        self.placeholders.iter().map(String::as_str).collect()
    }

    pub fn has_placeholders(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Substitute `args` into the template.
    ///
    /// On failure the error carries the name of the first placeholder that
    /// had no argument. Arguments that match no placeholder are ignored.
    pub fn render(&self, args: &[MessageArg], policy: MissingParameterPolicy) -> Result<String, &str> {
        if self.placeholders.is_empty() {
            return Ok(self.source.clone());
        }

        let find = |name: &str| args.iter().find(|arg| arg.name == name);

        if policy == MissingParameterPolicy::Error {
            if let Some(missing) = self.placeholders.iter().find(|p| find(p.as_str()).is_none()) {
                return Err(missing.as_str());
            }
        }

        let rendered = placeholder_pattern().replace_all(&self.source, |caps: &Captures| {
            match find(&caps[1]) {
                Some(arg) => arg.value.clone(),
                None if policy == MissingParameterPolicy::Keep => caps[0].to_string(),
                None => String::new(),
            }
        });
        Ok(rendered.into_owned())
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> Vec<MessageArg> {
        vec![MessageArg::new("name", value)]
    }

    #[test]
    fn extracts_placeholders_in_order() {
        let t = Template::new("{b} then {a} then {b} again");
        assert_eq!(t.placeholders(), ["b", "a"]);
        assert!(t.has_placeholders());
    }

    #[test]
    fn literal_braces_are_not_placeholders() {
        let t = Template::new("json {} or { spaced } or {1st} stays");
        assert!(!t.has_placeholders());
        assert_eq!(t.render(&[], MissingParameterPolicy::Error).unwrap(), t.source());
    }

    #[test]
    fn substitutes_named_values() {
        let t = Template::new("Create agent {name} success");
        assert_eq!(
            t.render(&name("foo"), MissingParameterPolicy::Error).unwrap(),
            "Create agent foo success"
        );
    }

    #[test]
    fn values_are_not_expanded_twice() {
        let t = Template::new("Delete Agent {name} success");
        let rendered = t
            .render(&name("{name}"), MissingParameterPolicy::Error)
            .unwrap();
        assert_eq!(rendered, "Delete Agent {name} success");
    }

    #[test]
    fn missing_parameter_policies() {
        let t = Template::new("Confirm to delete agent {name}");
        assert_eq!(t.render(&[], MissingParameterPolicy::Error), Err("name"));
        assert_eq!(
            t.render(&[], MissingParameterPolicy::Empty).unwrap(),
            "Confirm to delete agent "
        );
        assert_eq!(
            t.render(&[], MissingParameterPolicy::Keep).unwrap(),
            "Confirm to delete agent {name}"
        );
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let t = Template::new("请输入链码名称");
        let args = vec![MessageArg::new("unused", "x")];
        assert_eq!(
            t.render(&args, MissingParameterPolicy::Error).unwrap(),
            "请输入链码名称"
        );
    }

    #[test]
    fn policy_parses_from_snake_case() {
        let policy: MissingParameterPolicy = serde_yaml::from_str("keep").unwrap();
        assert_eq!(policy, MissingParameterPolicy::Keep);
    }
}
