//! Application constants.
//!
//! Centralizes magic numbers for the scoring and estimation heuristics so
//! the weights are named rather than scattered through the algorithms.

/// Regularity scoring constants.
pub mod scoring {
    /// Window widths tried, in order, when scanning for repeated units.
    pub const WINDOW_WIDTHS: [usize; 3] = [2, 3, 4];

    /// Points awarded per adjacent repeated window.
    pub const REPETITION_WEIGHT: u32 = 20;

    /// Points awarded per two-step alternation position.
    pub const ALTERNATION_WEIGHT: u32 = 15;

    /// Ceiling for repetition-based scores.
    pub const MAX_SCORE: u32 = 100;

    /// Ceiling for alternation-based scores.
    pub const ALTERNATION_MAX: u32 = 90;

    /// Score for patterns with no detectable regularity.
    pub const DEFAULT_SCORE: u32 = 30;
}

/// Syllable estimation constants.
pub mod estimation {
    /// Longest onset cluster length considered during boundary placement.
    pub const MAX_ONSET_LEN: usize = 3;
}
