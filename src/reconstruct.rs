//! Rebuilding a name from template tokens
//!
//! An omitted slot removes at most one neighbouring separator literal, and
//! only when leaving it would produce a leading, trailing or doubled
//! separator.

use crate::config::Configuration;
use crate::types::{Casing, ParsedName, TemplateToken};

fn slot_value(token: &TemplateToken, parsed: &ParsedName, config: &Configuration) -> Option<String> {
    match token {
        TemplateToken::PrefixSlot { pattern } => parsed
            .prefix
            .as_deref()
            .filter(|_| config.include_prefix)
            .map(|value| Casing::from_pattern(pattern).apply(value)),
        TemplateToken::BodySlot { pattern, ordinal } => parsed
            .bodies
            .get(*ordinal)
            .map(|value| Casing::from_pattern(pattern).apply(value)),
        TemplateToken::SideSlot { pattern } => parsed
            .side
            .as_deref()
            .filter(|_| config.include_side)
            .map(|value| Casing::from_pattern(pattern).apply(value)),
        TemplateToken::NumberSlot => parsed.number.clone(),
        TemplateToken::Literal { .. } => None,
    }
}

/// Fill the template with the parsed values
pub fn reconstruct(tokens: &[TemplateToken], parsed: &ParsedName, config: &Configuration) -> String {
    let is_separator_literal = |token: Option<&TemplateToken>| {
        matches!(token, Some(TemplateToken::Literal { ch }) if config.separators.contains(*ch))
    };

    let mut out = String::new();
    let mut skip_separator = false;

    for (i, token) in tokens.iter().enumerate() {
        if let TemplateToken::Literal { ch } = token {
            if skip_separator && config.separators.contains(*ch) {
                skip_separator = false;
                continue;
            }
            skip_separator = false;
            out.push(*ch);
            continue;
        }

        skip_separator = false;
        if let Some(value) = slot_value(token, parsed, config) {
            out.push_str(&value);
            continue;
        }

        let left_open = out.chars().next_back().map_or(true, |c| config.separators.contains(c));
        let next = tokens.get(i + 1);
        if left_open && is_separator_literal(next) {
            skip_separator = true;
        } else if next.is_none() && !out.is_empty() && left_open {
            out.pop();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse_template;

    fn parsed(prefix: Option<&str>, bodies: &[&str], side: Option<&str>, number: Option<&str>) -> ParsedName {
        ParsedName {
            prefix: prefix.map(str::to_string),
            bodies: bodies.iter().map(|b| b.to_string()).collect(),
            side: side.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    fn render(template: &str, name: &ParsedName, config: &Configuration) -> String {
        reconstruct(&parse_template(template), name, config)
    }

    #[test]
    fn test_all_slots_present() {
        let name = parsed(Some("Def"), &["Arm"], Some("L"), Some("01"));
        assert_eq!(render("Pr_Bd#.x", &name, &Configuration::default()), "Def_Arm01.l");
        assert_eq!(render("Pr_Bd#.X", &name, &Configuration::default()), "Def_Arm01.L");
    }

    #[test]
    fn test_missing_prefix_drops_following_separator() {
        let name = parsed(None, &["Arm"], None, None);
        assert_eq!(render("Pr_Bd", &name, &Configuration::default()), "Arm");
    }

    #[test]
    fn test_excluded_prefix() {
        let name = parsed(Some("Def"), &["Arm"], Some("L"), Some("01"));
        let config = Configuration::default().with_include_prefix(false);
        assert_eq!(render("Pr_Bd#.X", &name, &config), "Arm01.L");
    }

    #[test]
    fn test_missing_trailing_slot_drops_preceding_separator() {
        let name = parsed(Some("Def"), &["Arm"], None, None);
        assert_eq!(render("Pr_Bd#.x", &name, &Configuration::default()), "Def_Arm");
        let config = Configuration::default().with_include_side(false);
        let name = parsed(None, &["Arm"], Some("L"), None);
        assert_eq!(render("Bd.x", &name, &config), "Arm");
    }

    #[test]
    fn test_missing_middle_slot_no_double_separator() {
        let name = parsed(None, &["Arm"], Some("R"), None);
        assert_eq!(render("Bd_Pr_X", &name, &Configuration::default()), "Arm_R");
        assert_eq!(render("Bd_Pr_#_X", &name, &Configuration::default()), "Arm_R");
    }

    #[test]
    fn test_missing_slot_next_to_content_keeps_separator() {
        let name = parsed(Some("Def"), &["Arm"], Some("L"), None);
        assert_eq!(render("Pr_Bd#.X", &name, &Configuration::default()), "Def_Arm.L");
    }

    #[test]
    fn test_extra_body_slot_omitted() {
        let name = parsed(None, &["Arm"], None, Some("2"));
        assert_eq!(render("Bd_Bd_#", &name, &Configuration::default()), "Arm_2");
    }

    #[test]
    fn test_extra_bodies_dropped() {
        let name = parsed(None, &["Arm", "Upper", "Twist"], None, None);
        assert_eq!(render("BdBd", &name, &Configuration::default()), "ArmUpper");
    }

    #[test]
    fn test_number_not_cased_and_later_hash_literal() {
        let name = parsed(None, &["arm"], None, Some("007"));
        assert_eq!(render("BD#-#", &name, &Configuration::default()), "ARM007-#");
    }

    #[test]
    fn test_everything_missing() {
        let name = ParsedName::default();
        assert_eq!(render("Pr_BdBd#.x", &name, &Configuration::default()), "");
    }

    #[test]
    fn test_template_literals_kept_without_omission() {
        let name = parsed(None, &["Arm"], None, None);
        assert_eq!(render("_Bd_", &name, &Configuration::default()), "_Arm_");
    }

    #[test]
    fn test_non_separator_literals_never_suppressed() {
        let name = parsed(None, &["Arm"], None, None);
        assert_eq!(render("Pr~Bd", &name, &Configuration::default()), "~Arm");
    }
}
