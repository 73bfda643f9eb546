//! Template parsing and casing rules
//!
//! A template such as `Pr_BdBd#.x` is scanned once into [`TemplateToken`]s.
//! Placeholders are matched case-insensitively in this order:
//! `Pr` (prefix), `Bd` (body), `x` (side), `#` (number). The case the
//! placeholder was written in decides the case of the value put in its place.

use std::sync::{Arc, PoisonError, RwLock};

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::types::{Casing, TemplateToken};

static TEMPLATES: Lazy<TemplateCache> = Lazy::new(TemplateCache::new);

fn pair_matches(chars: &[char], at: usize, pair: [char; 2]) -> bool {
    match (chars.get(at), chars.get(at + 1)) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(&pair[0]) && b.eq_ignore_ascii_case(&pair[1]),
        _ => false,
    }
}

/// Scan a template into tokens.
///
/// Only the first `#` becomes a number slot; later ones are literals.
pub fn parse_template(template: &str) -> Vec<TemplateToken> {
    let chars: Vec<char> = template.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut body_slots = 0;
    let mut number_seen = false;
    let mut i = 0;

    while i < chars.len() {
        if pair_matches(&chars, i, ['p', 'r']) {
            tokens.push(TemplateToken::PrefixSlot {
                pattern: chars[i..i + 2].iter().collect(),
            });
            i += 2;
        } else if pair_matches(&chars, i, ['b', 'd']) {
            tokens.push(TemplateToken::BodySlot {
                pattern: chars[i..i + 2].iter().collect(),
                ordinal: body_slots,
            });
            body_slots += 1;
            i += 2;
        } else if chars[i].eq_ignore_ascii_case(&'x') {
            tokens.push(TemplateToken::SideSlot {
                pattern: chars[i].to_string(),
            });
            i += 1;
        } else if chars[i] == '#' && !number_seen {
            number_seen = true;
            tokens.push(TemplateToken::NumberSlot);
            i += 1;
        } else {
            tokens.push(TemplateToken::Literal { ch: chars[i] });
            i += 1;
        }
    }

    tokens
}

/// Parse a template through the process-wide cache
pub fn parse_template_cached(template: &str) -> Arc<[TemplateToken]> {
    TEMPLATES.get_or_parse(template)
}

/// Memoized template parses, safe to share between threads
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: RwLock<AHashMap<String, Arc<[TemplateToken]>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&self, template: &str) -> Arc<[TemplateToken]> {
        if let Some(tokens) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(template)
        {
            log::trace!("template cache hit: {:?}", template);
            return Arc::clone(tokens);
        }

        log::trace!("template cache miss: {:?}", template);
        let tokens: Arc<[TemplateToken]> = parse_template(template).into();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(template.to_string())
            .or_insert(tokens)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Casing {
    /// Derive the casing rule from a placeholder as written in the template.
    ///
    /// One-character patterns (`x`/`X`) only choose upper or lower.
    pub fn from_pattern(pattern: &str) -> Self {
        let mut chars = pattern.chars();
        let first_upper = chars.next().map_or(false, char::is_uppercase);

        match chars.next() {
            None if first_upper => Casing::Upper,
            None => Casing::Lower,
            Some(second) => match (first_upper, second.is_uppercase()) {
                (true, true) => Casing::Upper,
                (false, false) => Casing::Lower,
                (true, false) => Casing::Capitalize,
                (false, true) => Casing::LowerFirst,
            },
        }
    }

    pub fn apply(self, value: &str) -> String {
        match self {
            Casing::Upper => value.to_uppercase(),
            Casing::Lower => value.to_lowercase(),
            Casing::Capitalize => split_first(value, char::to_uppercase, str::to_lowercase),
            Casing::LowerFirst => split_first(value, char::to_lowercase, str::to_uppercase),
        }
    }
}

fn split_first<F, I>(value: &str, first: F, rest: fn(&str) -> String) -> String
where
    F: Fn(char) -> I,
    I: Iterator<Item = char>,
{
    let mut chars = value.chars();
    match chars.next() {
        Some(c) => first(c).chain(rest(chars.as_str()).chars()).collect(),
        None => String::new(),
    }
}
