//! Splitting identifiers into segments

use crate::config::SeparatorSet;

/// Split `raw` on any separator character.
///
/// Separators are discarded and empty runs are dropped, so `"-Arm__L-"`
/// yields `["Arm", "L"]`.
pub fn tokenize(raw: &str, separators: &SeparatorSet) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for c in raw.chars() {
        if separators.contains(c) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
