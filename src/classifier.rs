//! Segment classification
//!
//! Each segment is tested as Prefix, then Side, then Number, falling back
//! to Body. Prefix, Side and Number are exclusive: only the leftmost
//! segment of each kind keeps it, later ones are re-tested from the next
//! kind down and usually land in Body.

use crate::config::Configuration;
use crate::types::{ParsedName, Segment, SegmentKind};

const PRIORITY: [SegmentKind; 3] = [SegmentKind::Prefix, SegmentKind::Side, SegmentKind::Number];

fn matches_kind(text: &str, kind: SegmentKind, config: &Configuration) -> bool {
    match kind {
        SegmentKind::Prefix => config.is_prefix(text),
        SegmentKind::Side => config.is_side(text),
        SegmentKind::Number => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
        SegmentKind::Body | SegmentKind::Undefined => false,
    }
}

/// Assign a kind to every segment, applying the exclusivity rule.
///
/// Zero-length entries come back as `Undefined`.
pub fn classify_segments<S: AsRef<str>>(segments: &[S], config: &Configuration) -> Vec<Segment> {
    let mut taken = [false; PRIORITY.len()];

    segments
        .iter()
        .map(|segment| {
            let text = segment.as_ref();
            if text.is_empty() {
                return Segment::new(text, SegmentKind::Undefined);
            }

            let kind = PRIORITY
                .iter()
                .enumerate()
                .find(|(i, kind)| !taken[*i] && matches_kind(text, **kind, config))
                .map(|(i, kind)| {
                    taken[i] = true;
                    *kind
                })
                .unwrap_or(SegmentKind::Body);

            Segment::new(text, kind)
        })
        .collect()
}

/// Classify segments into a [`ParsedName`]
pub fn classify<S: AsRef<str>>(segments: &[S], config: &Configuration) -> ParsedName {
    let mut parsed = ParsedName::default();

    for segment in classify_segments(segments, config) {
        match segment.kind {
            SegmentKind::Prefix => parsed.prefix = Some(segment.text),
            SegmentKind::Side => parsed.side = Some(segment.text),
            SegmentKind::Number => parsed.number = Some(segment.text),
            SegmentKind::Body => parsed.bodies.push(segment.text),
            SegmentKind::Undefined => {}
        }
    }

    parsed
}
