//! Core data types for parsed names and templates

use serde::{Deserialize, Serialize};

/// Semantic role of one segment of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Prefix,
    Side,
    Number,
    Body,
    Undefined,
}

/// One delimiter-bounded run of characters, in original order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

/// Result of classifying an identifier's segments
///
/// At most one prefix, side and number are kept. Later matches of those
/// kinds end up in `bodies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub prefix: Option<String>,
    pub bodies: Vec<String>,
    pub side: Option<String>,
    pub number: Option<String>,
}

/// Letter-case rule derived from a template placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    /// `PR`, `X`
    Upper,
    /// `pr`, `x`
    Lower,
    /// `Pr`
    Capitalize,
    /// `pR`
    LowerFirst,
}

/// One element of a parsed template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateToken {
    Literal { ch: char },
    PrefixSlot { pattern: String },
    BodySlot { pattern: String, ordinal: usize },
    SideSlot { pattern: String },
    NumberSlot,
}

impl Segment {
    pub fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

impl ParsedName {
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.bodies.is_empty() && self.side.is_none() && self.number.is_none()
    }
}
