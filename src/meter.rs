//! Meter classification and regularity scoring.
//!
//! Classification is a first-match scan over a fixed, ordered template
//! table; the score is a cheap repetition/alternation heuristic meant for
//! relative comparison between lines, not an absolute measure.

use crate::constants::scoring;

/// A named metrical foot with its stress-mark pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterTemplate {
    /// Human-readable meter name.
    pub name: &'static str,
    /// Raw stress-mark pattern matched as a literal substring.
    pub pattern: &'static str,
    /// Short description for display.
    pub description: &'static str,
}

/// The five recognized meters, in match-priority order.
///
/// Order is load-bearing: classification returns the first template whose
/// pattern occurs in the line, so `uSuS` is Iambic even though other feet
/// partially match.
pub const TEMPLATES: [MeterTemplate; 5] = [
    MeterTemplate {
        name: "Iambic",
        pattern: "uS",
        description: "unstressed-stressed, rising rhythm (da-DUM)",
    },
    MeterTemplate {
        name: "Trochaic",
        pattern: "Su",
        description: "stressed-unstressed, falling rhythm (DUM-da)",
    },
    MeterTemplate {
        name: "Anapestic",
        pattern: "uuS",
        description: "two unstressed then stressed (da-da-DUM)",
    },
    MeterTemplate {
        name: "Dactylic",
        pattern: "Suu",
        description: "stressed then two unstressed (DUM-da-da)",
    },
    MeterTemplate {
        name: "Spondaic",
        pattern: "SS",
        description: "two consecutive stresses (DUM-DUM)",
    },
];

/// Name used when no template matches.
pub const CUSTOM: &str = "Custom";

/// Find the first template whose pattern is a literal substring of the
/// line's stress pattern.
#[must_use]
pub fn identify(pattern: &str) -> Option<&'static MeterTemplate> {
    TEMPLATES.iter().find(|t| pattern.contains(t.pattern))
}

/// Classify a stress pattern, returning `"Custom"` when nothing matches.
#[must_use]
pub fn meter_name(pattern: &str) -> &'static str {
    identify(pattern).map_or(CUSTOM, |t| t.name)
}

/// Score how regular a stress pattern is, in `[0, 100]`.
///
/// Scans non-overlapping windows of width 2, 3, then 4, stopping at the
/// first width with any adjacent repeated window (20 points each, capped
/// at 100). Without repetition, two-step alternation positions score 15
/// points each (capped at 90). A pattern with neither scores a flat 30.
#[must_use]
pub fn regularity_score(pattern: &str) -> u32 {
    let marks: Vec<char> = pattern.chars().collect();

    for width in scoring::WINDOW_WIDTHS {
        let repetitions = marks
            .chunks_exact(width)
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .count();
        if repetitions > 0 {
            let count = u32::try_from(repetitions).unwrap_or(u32::MAX);
            return scoring::MAX_SCORE.min(count.saturating_mul(scoring::REPETITION_WEIGHT));
        }
    }

    let alternations = (0..marks.len().saturating_sub(2))
        .filter(|&i| marks[i] == marks[i + 2])
        .count();
    if alternations > 0 {
        let count = u32::try_from(alternations).unwrap_or(u32::MAX);
        return scoring::ALTERNATION_MAX.min(count.saturating_mul(scoring::ALTERNATION_WEIGHT));
    }

    scoring::DEFAULT_SCORE
}
