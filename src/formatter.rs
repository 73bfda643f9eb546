//! Name formatter - runs the tokenize, classify, reconstruct pipeline

use std::sync::Arc;

use crate::classifier::{classify, classify_segments};
use crate::config::Configuration;
use crate::reconstruct::reconstruct;
use crate::template::parse_template_cached;
use crate::tokenizer::tokenize;
use crate::types::{ParsedName, Segment, TemplateToken};

/// Renames identifiers with one fixed configuration
///
/// The template is parsed once up front and shared through the template
/// cache, so formatters for the same template are cheap to create.
#[derive(Debug, Clone)]
pub struct NameFormatter {
    config: Configuration,
    tokens: Arc<[TemplateToken]>,
}

impl NameFormatter {
    pub fn new(config: Configuration) -> Self {
        for problem in config.diagnostics() {
            log::warn!("{}", problem);
        }
        let tokens = parse_template_cached(&config.template);

        Self { config, tokens }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn template_tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn segments(&self, name: &str) -> Vec<Segment> {
        classify_segments(&tokenize(name, &self.config.separators), &self.config)
    }

    pub fn parse(&self, name: &str) -> ParsedName {
        classify(&tokenize(name, &self.config.separators), &self.config)
    }

    pub fn rename(&self, name: &str) -> String {
        let parsed = self.parse(name);
        let renamed = reconstruct(&self.tokens, &parsed, &self.config);
        log::debug!("renamed {:?} -> {:?}", name, renamed);
        renamed
    }

    /// Rename every identifier, keeping input order
    pub fn rename_all<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names.iter().map(|name| self.rename(name.as_ref())).collect()
    }
}

impl Default for NameFormatter {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

/// Rename a batch of identifiers under `config`
pub fn rename_all<S: AsRef<str>>(identifiers: &[S], config: &Configuration) -> Vec<String> {
    NameFormatter::new(config.clone()).rename_all(identifiers)
}
