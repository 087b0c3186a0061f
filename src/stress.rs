//! Section-aware stress assignment.
//!
//! The default stress pattern of a line is whatever the estimator
//! produced per word. The auto-analyze override discards estimated
//! stress and re-derives every content line's flags from a fixed
//! section-type meter policy.

use crate::types::{Line, Section, SectionKind};
use tracing::debug;

/// Decide the stress of syllable `i` under the meter policy for a
/// section kind, given the line's offset within its section.
///
/// Verses alternate Trochaic and Iambic by line parity; choruses are
/// Trochaic throughout, bridges Dactylic, pre-choruses Anapestic, and
/// everything else alternates from a stressed start.
#[must_use]
pub const fn policy_stress(kind: SectionKind, line_offset: usize, i: usize) -> bool {
    match kind {
        SectionKind::Verse => {
            if line_offset % 2 == 0 {
                i % 2 == 0
            } else {
                i % 2 == 1
            }
        }
        SectionKind::Chorus => i % 2 == 0,
        SectionKind::Bridge => i % 3 == 0,
        SectionKind::PreChorus => i % 3 == 2,
        SectionKind::Intro | SectionKind::Outro => i % 2 == 0,
    }
}

/// Re-derive stress flags for every content line from the section meter
/// policy, then regenerate each line's pattern string.
///
/// Title lines are skipped (they carry no syllables). Estimated or
/// manually edited stress is overwritten wholesale.
pub fn auto_assign(lines: &mut [Line], sections: &[Section]) {
    for section in sections {
        let end = section.end.min(lines.len());
        for index in section.start..end {
            let offset = index - section.start;
            let line = &mut lines[index];
            if line.is_section_title {
                continue;
            }
            for (i, syllable) in line.syllables.iter_mut().enumerate() {
                syllable.stressed = policy_stress(section.kind, offset, i);
            }
            line.rebuild_pattern();
        }
    }
    debug!(sections = sections.len(), "applied section meter policy");
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::types::Syllable;

    fn content_line(marks: &str) -> Line {
        let syllables = marks
            .chars()
            .map(|c| Syllable::new("x", c == 'S'))
            .collect();
        Line::content("test", syllables)
    }

    #[test]
    fn test_chorus_is_trochaic() {
        let mut lines = vec![content_line("uuuuu"), content_line("uuuu")];
        let sections = vec![Section::new(SectionKind::Chorus, 0, 2)];
        auto_assign(&mut lines, &sections);
        assert_eq!(lines[0].stress_pattern, "SuSuS");
        assert_eq!(lines[1].stress_pattern, "SuSu");
    }

    #[test]
    fn test_verse_alternates_by_line_parity() {
        let mut lines = vec![content_line("uuuu"), content_line("uuuu")];
        let sections = vec![Section::new(SectionKind::Verse, 0, 2)];
        auto_assign(&mut lines, &sections);
        // Even line offset: Trochaic; odd: Iambic
        assert_eq!(lines[0].stress_pattern, "SuSu");
        assert_eq!(lines[1].stress_pattern, "uSuS");
    }

    #[test]
    fn test_bridge_is_dactylic() {
        let mut lines = vec![content_line("uuuuuu")];
        let sections = vec![Section::new(SectionKind::Bridge, 0, 1)];
        auto_assign(&mut lines, &sections);
        assert_eq!(lines[0].stress_pattern, "SuuSuu");
    }

    #[test]
    fn test_pre_chorus_is_anapestic() {
        let mut lines = vec![content_line("uuuuuu")];
        let sections = vec![Section::new(SectionKind::PreChorus, 0, 1)];
        auto_assign(&mut lines, &sections);
        assert_eq!(lines[0].stress_pattern, "uuSuuS");
    }

    #[test]
    fn test_title_lines_are_skipped() {
        let mut lines = vec![Line::title("[Chorus]"), content_line("uuu")];
        // Deliberately malformed range covering the title; it must survive
        let sections = vec![Section::new(SectionKind::Chorus, 0, 2)];
        auto_assign(&mut lines, &sections);
        assert_eq!(lines[0].stress_pattern, "");
        assert_eq!(lines[1].stress_pattern, "SuS");
    }

    #[test]
    fn test_intro_defaults_to_alternating() {
        let mut lines = vec![content_line("uuuu")];
        let sections = vec![Section::new(SectionKind::Intro, 0, 1)];
        auto_assign(&mut lines, &sections);
        assert_eq!(lines[0].stress_pattern, "SuSu");
    }
}
