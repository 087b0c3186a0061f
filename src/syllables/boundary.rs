//! Vowel-group detection and syllable boundary placement.
//!
//! Boundaries between syllables are resolved with a simplified Maximum
//! Onset Principle: consonants between two vowel nuclei preferentially
//! begin the following syllable when they form a valid English onset.

use crate::config::EstimatorConfig;
use crate::constants::estimation::MAX_ONSET_LEN;
use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Consonant clusters that can legally begin an English syllable.
    ///
    /// Used when three or more consonants separate two vowel groups; the
    /// longest matching suffix of the cluster starts the next syllable.
    pub static ref ONSET_CLUSTERS: HashSet<&'static str> = [
        // Three-consonant onsets
        "spl", "spr", "str", "scr", "squ", "shr", "thr", "sch",
        // Two-consonant onsets
        "bl", "br", "cl", "cr", "dr", "dw", "fl", "fr", "gl", "gr",
        "pl", "pr", "sc", "sk", "sl", "sm", "sn", "sp", "st", "sw",
        "tr", "tw", "th", "sh", "ch", "wh", "ph", "wr", "qu", "gn",
        "kn",
    ]
    .into_iter()
    .collect();
}

/// Check whether a character counts as a vowel for nucleus detection.
///
/// `y` is treated as a vowel throughout; the over-counting this causes in
/// onsets like "yes" is accepted for behavioral stability.
#[must_use]
pub const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Find the start index (in chars) of each maximal vowel run.
///
/// Consecutive vowels collapse into a single group, so diphthongs count
/// as one nucleus.
#[must_use]
pub fn vowel_group_starts(clean: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_group = false;
    for (i, c) in clean.chars().enumerate() {
        if is_vowel(c) {
            if !in_group {
                starts.push(i);
                in_group = true;
            }
        } else {
            in_group = false;
        }
    }
    starts
}

/// Estimate the syllable count of a cleaned word from its vowel groups.
///
/// Two orthographic corrections apply in order: a trailing "le" after a
/// consonant adds a group, then a silent trailing "e" after a consonant
/// removes one. The result is clamped to at least 1.
#[must_use]
pub fn estimate_count(clean: &str) -> usize {
    let chars: Vec<char> = clean.chars().collect();
    let mut count = vowel_group_starts(clean).len();

    let n = chars.len();
    if n >= 3 && chars[n - 2] == 'l' && chars[n - 1] == 'e' && !is_vowel(chars[n - 3]) {
        count += 1;
    }
    if n >= 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]) {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// Compute syllable split points (char indices into `clean`) for a word
/// with `count` syllables.
///
/// Returns `None` when the vowel-group structure cannot realize `count`
/// syllables (a dictionary count disagreeing with the orthography); the
/// caller falls back to proportional division.
#[must_use]
pub fn split_points(clean: &str, count: usize, config: &EstimatorConfig) -> Option<Vec<usize>> {
    let groups = vowel_group_starts(clean);
    if count == 0 || groups.len() != count {
        return None;
    }
    if count == 1 {
        return Some(Vec::new());
    }

    let chars: Vec<char> = clean.chars().collect();
    let mut points = Vec::with_capacity(count - 1);

    for pair in groups.windows(2) {
        let (group, next) = (pair[0], pair[1]);
        // End of the current vowel run
        let mut run_end = group;
        while run_end < chars.len() && is_vowel(chars[run_end]) {
            run_end += 1;
        }
        let cluster_len = next - run_end;
        let point = match cluster_len {
            0 => next,
            1 => run_end,
            2 => run_end + 1,
            _ => onset_split(&chars, run_end, next, config),
        };
        points.push(point);
    }

    Some(points)
}

/// Resolve a boundary inside a cluster of three or more consonants.
///
/// Searches from the end of the cluster for the longest valid onset to
/// start the next syllable; splits the cluster at its midpoint when no
/// onset matches.
fn onset_split(chars: &[char], run_end: usize, next: usize, config: &EstimatorConfig) -> usize {
    let cluster_len = next - run_end;
    let longest = MAX_ONSET_LEN.min(cluster_len);
    for onset_len in (2..=longest).rev() {
        let candidate: String = chars[next - onset_len..next].iter().collect();
        if config.is_onset(&candidate) {
            return next - onset_len;
        }
    }
    run_end + cluster_len / 2
}
