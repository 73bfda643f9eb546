//! Renaming configuration supplied by the host

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::parse_template;
use crate::types::TemplateToken;

pub const DEFAULT_TEMPLATE: &str = "Pr_BdBd#.x";
pub const DEFAULT_SEPARATORS: &str = "-_./";
pub const DEFAULT_PREFIXES: &[&str] = &["Def", "Ctrl"];
pub const DEFAULT_SIDES: &[&str] = &["l", "r", "L", "R"];

/// Problems found in a configuration
///
/// Only `Parse` is a hard error. The other variants describe templates
/// that degrade to omitted output.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Template contains a side slot but no side values are configured")]
    SideSlotWithoutSides,

    #[error("Template contains a prefix slot but no prefix values are configured")]
    PrefixSlotWithoutPrefixes,

    #[error("'{value}' is listed as both a prefix and a side; it will be classified as a prefix")]
    AmbiguousValue { value: String },
}

/// Set of separator characters, kept in first-seen order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SeparatorSet {
    chars: Vec<char>,
    lookup: AHashSet<char>,
}

impl SeparatorSet {
    pub fn new(chars: &str) -> Self {
        let mut lookup = AHashSet::new();
        let chars = chars.chars().filter(|c| lookup.insert(*c)).collect();
        Self { chars, lookup }
    }

    pub fn contains(&self, c: char) -> bool {
        self.lookup.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl PartialEq for SeparatorSet {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for SeparatorSet {}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

impl From<&str> for SeparatorSet {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl From<String> for SeparatorSet {
    fn from(chars: String) -> Self {
        Self::new(&chars)
    }
}

impl From<SeparatorSet> for String {
    fn from(set: SeparatorSet) -> Self {
        set.as_string()
    }
}

/// Everything the pipeline needs to rename an identifier
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub template: String,
    pub separators: SeparatorSet,
    pub prefixes: Vec<String>,
    pub sides: Vec<String>,
    pub include_prefix: bool,
    pub include_side: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            separators: SeparatorSet::default(),
            prefixes: DEFAULT_PREFIXES.iter().map(|s| s.to_string()).collect(),
            sides: DEFAULT_SIDES.iter().map(|s| s.to_string()).collect(),
            include_prefix: true,
            include_side: true,
        }
    }
}

impl Configuration {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a configuration from the host's raw text fields.
    ///
    /// `format_prefix` is a comma-separated list such as `Def,Ctrl`.
    pub fn from_settings(format_guide: &str, separator_chars: &str, format_prefix: &str) -> Self {
        Self {
            template: format_guide.to_string(),
            separators: SeparatorSet::new(separator_chars),
            prefixes: Self::parse_list(format_prefix),
            ..Self::default()
        }
    }

    /// Split a comma-separated setting into trimmed, non-empty entries
    pub fn parse_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_separators(mut self, separators: &str) -> Self {
        self.separators = SeparatorSet::new(separators);
        self
    }

    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sides<I, S>(mut self, sides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sides = sides.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_include_prefix(mut self, include: bool) -> Self {
        self.include_prefix = include;
        self
    }

    pub fn with_include_side(mut self, include: bool) -> Self {
        self.include_side = include;
        self
    }

    pub fn is_prefix(&self, text: &str) -> bool {
        self.prefixes.iter().any(|p| p == text)
    }

    pub fn is_side(&self, text: &str) -> bool {
        self.sides.iter().any(|s| s == text)
    }

    /// Report settings that make part of the template unreachable.
    ///
    /// None of these stop renaming; the affected slots are simply omitted.
    pub fn diagnostics(&self) -> Vec<ConfigurationError> {
        let tokens = parse_template(&self.template);
        let mut found = Vec::new();

        let has_prefix_slot = tokens
            .iter()
            .any(|t| matches!(t, TemplateToken::PrefixSlot { .. }));
        let has_side_slot = tokens
            .iter()
            .any(|t| matches!(t, TemplateToken::SideSlot { .. }));

        if has_prefix_slot && self.include_prefix && self.prefixes.is_empty() {
            found.push(ConfigurationError::PrefixSlotWithoutPrefixes);
        }
        if has_side_slot && self.include_side && self.sides.is_empty() {
            found.push(ConfigurationError::SideSlotWithoutSides);
        }
        for side in &self.sides {
            if self.is_prefix(side) {
                found.push(ConfigurationError::AmbiguousValue {
                    value: side.clone(),
                });
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.template, "Pr_BdBd#.x");
        assert_eq!(config.separators.as_string(), "-_./");
        assert_eq!(config.prefixes, vec!["Def", "Ctrl"]);
        assert_eq!(config.sides, vec!["l", "r", "L", "R"]);
        assert!(config.include_prefix);
        assert!(config.include_side);
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_separator_set_dedups() {
        let set = SeparatorSet::new("_-_.");
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_string(), "_-.");
        assert!(set.contains('.'));
        assert!(!set.contains('/'));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(Configuration::parse_list("Def,Ctrl"), vec!["Def", "Ctrl"]);
        assert_eq!(Configuration::parse_list(" Def , ,MCH,"), vec!["Def", "MCH"]);
        assert!(Configuration::parse_list("").is_empty());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Configuration::from_json(r#"{"template": "Bd.x", "separators": "_", "include_side": false}"#)
            .expect("valid json");
        assert_eq!(config.template, "Bd.x");
        assert!(config.separators.contains('_'));
        assert!(!config.separators.contains('-'));
        assert!(!config.include_side);
        assert_eq!(config.prefixes, vec!["Def", "Ctrl"]);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Configuration::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_separators_as_string() {
        let json = serde_json::to_string(&Configuration::default()).unwrap();
        assert!(json.contains(r#""separators":"-_./""#));
    }

    #[test]
    fn test_from_settings() {
        let config = Configuration::from_settings("Bd_x", ".", "MCH,DEF");
        assert_eq!(config.template, "Bd_x");
        assert_eq!(config.prefixes, vec!["MCH", "DEF"]);
        assert_eq!(config.sides, vec!["l", "r", "L", "R"]);
    }

    #[test]
    fn test_diagnostics() {
        let config = Configuration::default()
            .with_prefixes(Vec::<String>::new())
            .with_sides(["L", "Def"])
            .with_prefixes(["Def"]);
        let found = config.diagnostics();
        assert_eq!(found.len(), 1);
        assert!(matches!(&found[0], ConfigurationError::AmbiguousValue { value } if value == "Def"));

        let config = Configuration::default()
            .with_prefixes(Vec::<String>::new())
            .with_sides(Vec::<String>::new());
        let found = config.diagnostics();
        assert!(found.iter().any(|e| matches!(e, ConfigurationError::PrefixSlotWithoutPrefixes)));
        assert!(found.iter().any(|e| matches!(e, ConfigurationError::SideSlotWithoutSides)));

        let config = config.with_include_side(false).with_template("Bd");
        assert!(config.diagnostics().is_empty());
    }
}
