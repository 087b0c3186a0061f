//! Syllable estimation for single words and whole lines.
//!
//! Three-tier strategy per token: exact dictionary lookup, then
//! vowel-group derivation with orthographic corrections, then a
//! proportional-division fallback that guarantees total coverage.
//! Whatever the tier, the concatenated syllable texts always reconstruct
//! the original token byte-for-byte.

pub mod boundary;
pub mod dict;

use crate::config::EstimatorConfig;
use crate::types::Syllable;

/// Reduce a token to its cleaned form: ASCII-lowercased, letters only.
///
/// Punctuation and digits are stripped; the cleaned form is what the
/// dictionary and the vowel-group rules operate on.
#[must_use]
pub fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Generate the rule-table stress pattern for a syllable count.
///
/// 1 → stressed; 2 → stress-initial; 3 → stress-initial; longer words
/// stress even positions plus the antepenultimate. The antepenultimate
/// rule is a deliberate simplification kept for behavioral stability.
#[must_use]
pub fn rule_stress(count: usize) -> Vec<bool> {
    match count {
        0 | 1 => vec![true],
        2 => vec![true, false],
        3 => vec![true, false, false],
        n => (0..n).map(|i| i + 3 == n || i % 2 == 0).collect(),
    }
}

/// Segment one whitespace-delimited token into syllables.
///
/// Never fails: a token with no letters yields a single unstressed
/// syllable covering the whole token.
#[must_use]
pub fn estimate_word(token: &str, config: &EstimatorConfig) -> Vec<Syllable> {
    let clean = clean_token(token);
    if clean.is_empty() {
        return vec![Syllable::new(token, false)];
    }

    // Dictionary tier, then rule tier
    let stress = config.lookup(&clean).map_or_else(
        || rule_stress(boundary::estimate_count(&clean)),
        <[bool]>::to_vec,
    );
    let count = stress.len();
    if count == 1 {
        return vec![Syllable::new(token, stress[0])];
    }

    // Boundary placement on the cleaned word, mapped back to the token
    boundary::split_points(&clean, count, config).map_or_else(
        || proportional_split(token, count),
        |points| split_at_letters(token, &points, &stress),
    )
}

/// Segment every token of a line, in word order.
#[must_use]
pub fn estimate_line(text: &str, config: &EstimatorConfig) -> Vec<Syllable> {
    text.split_whitespace()
        .flat_map(|token| estimate_word(token, config))
        .collect()
}

/// Slice the original token at boundaries expressed as letter indices.
///
/// `points` index into the cleaned word; each maps to the byte offset of
/// the corresponding letter of the original token, so punctuation and
/// case survive inside the syllable pieces.
fn split_at_letters(token: &str, points: &[usize], stress: &[bool]) -> Vec<Syllable> {
    let letter_offsets: Vec<usize> = token
        .char_indices()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();

    let mut syllables = Vec::with_capacity(stress.len());
    let mut start = 0;
    for (k, &point) in points.iter().enumerate() {
        let end = letter_offsets.get(point).copied().unwrap_or(token.len());
        syllables.push(Syllable::new(&token[start..end], stress[k]));
        start = end;
    }
    let last = stress.len() - 1;
    syllables.push(Syllable::new(&token[start..], stress[last]));
    syllables
}

/// Fallback tier: divide the token into `count` near-equal char chunks.
///
/// Used when the vowel-group structure cannot realize the requested
/// count. Stress comes positionally from the rule table, and the count is
/// clamped so no chunk is empty.
fn proportional_split(token: &str, count: usize) -> Vec<Syllable> {
    let chars: Vec<(usize, char)> = token.char_indices().collect();
    let count = count.clamp(1, chars.len().max(1));
    let stress = rule_stress(count);

    let base = chars.len() / count;
    let extra = chars.len() % count;

    let mut syllables = Vec::with_capacity(count);
    let mut index = 0;
    for (k, &stressed) in stress.iter().enumerate().take(count) {
        let size = base + usize::from(k < extra);
        let start = chars[index].0;
        index += size;
        let end = chars.get(index).map_or(token.len(), |&(b, _)| b);
        syllables.push(Syllable::new(&token[start..end], stressed));
    }
    syllables
}
