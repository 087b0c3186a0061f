//! The full analysis pipeline: lyric text in, analyzed lines out.
//!
//! Runs the section segmenter and the per-word syllable estimator over
//! every line, and derives the per-line meter name and regularity score
//! for display. The pipeline is pure and total: identical input always
//! produces identical output, and no input can make it fail.

use crate::config::EstimatorConfig;
use crate::meter;
use crate::sections;
use crate::syllables;
use crate::types::{Line, Section};
use serde::Serialize;
use tracing::debug;

/// Display data for one content line: its classified meter and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// Index of the line in the analysis.
    pub line_index: usize,
    /// Name of the first matching meter template, or `"Custom"`.
    pub meter: &'static str,
    /// Regularity score in `[0, 100]`.
    pub score: u32,
}

/// The result of one analysis run over a lyric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Every line of the lyric, in order, titles included.
    pub lines: Vec<Line>,
    /// Tagged sections covering all non-title lines.
    pub sections: Vec<Section>,
}

/// Analyze a raw lyric string into lines and sections.
#[must_use]
pub fn analyze(lyric: &str, config: &EstimatorConfig) -> Analysis {
    let lines: Vec<Line> = sections::split_lines(lyric)
        .into_iter()
        .map(|text| {
            if sections::is_section_title(&text) {
                Line::title(text)
            } else {
                let syllables = syllables::estimate_line(&text, config);
                Line::content(text, syllables)
            }
        })
        .collect();
    let segments = sections::segment(&lines);
    debug!(
        lines = lines.len(),
        sections = segments.len(),
        "analyzed lyric"
    );
    Analysis {
        lines,
        sections: segments,
    }
}

impl Analysis {
    /// The section covering a given line index, if any (title lines and
    /// out-of-range indices have none).
    #[must_use]
    pub fn section_of(&self, line_index: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(line_index))
    }

    /// Meter name and regularity score for every line with syllables.
    #[must_use]
    pub fn reports(&self) -> Vec<LineReport> {
        line_reports(&self.lines)
    }
}

/// Meter name and regularity score for every line with syllables.
///
/// Free-standing so drivers holding a session snapshot (rather than an
/// [`Analysis`]) can derive display data too.
#[must_use]
pub fn line_reports(lines: &[Line]) -> Vec<LineReport> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.has_syllables())
        .map(|(line_index, line)| LineReport {
            line_index,
            meter: meter::meter_name(&line.stress_pattern),
            score: meter::regularity_score(&line.stress_pattern),
        })
        .collect()
}
