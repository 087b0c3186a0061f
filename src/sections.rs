//! Section segmentation: splitting a lyric into lines and tagged spans.
//!
//! A line whose trimmed text has the bracketed-tag shape (`[Chorus]`) is a
//! section title; everything between two titles belongs to one section.
//! Malformed tags (a missing closing bracket) are ordinary lyric text.

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use crate::types::{Line, Section, SectionKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Bracketed-tag shape: starts with `[`, ends with `]`.
    static ref SECTION_TAG: Regex = Regex::new(r"^\[.*\]$").unwrap();
}

/// Keywords checked, in priority order, when inferring a section kind
/// from a title. `pre-chorus` must precede `chorus` because the latter is
/// a substring of the former.
const KIND_KEYWORDS: &[(&str, SectionKind)] = &[
    ("pre-chorus", SectionKind::PreChorus),
    ("chorus", SectionKind::Chorus),
    ("bridge", SectionKind::Bridge),
    ("intro", SectionKind::Intro),
    ("outro", SectionKind::Outro),
];

/// Check whether a raw line is a section title.
#[must_use]
pub fn is_section_title(line: &str) -> bool {
    SECTION_TAG.is_match(line.trim())
}

/// Infer a section kind from a title line by case-insensitive substring
/// match, defaulting to [`SectionKind::Verse`].
#[must_use]
pub fn infer_kind(title: &str) -> SectionKind {
    let lowered = title.to_lowercase();
    KIND_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(SectionKind::Verse, |&(_, kind)| kind)
}

/// Split raw lyric text into lines, preserving empty lines as positional
/// placeholders. A trailing `\r` is stripped from each line so CRLF input
/// behaves like LF input.
#[must_use]
pub fn split_lines(lyric: &str) -> Vec<String> {
    lyric
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Group analyzed lines into tagged sections.
///
/// Sections are contiguous and non-overlapping, cover every non-title
/// line exactly once, and never include title lines. Lines before the
/// first title fall into an implicit leading verse; with no titles at
/// all, a single verse spans the whole lyric. Tags followed immediately
/// by another tag produce no section.
#[must_use]
pub fn segment(lines: &[Line]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut kind = SectionKind::Verse;
    let mut start = 0;

    for (i, line) in lines.iter().enumerate() {
        if line.is_section_title {
            if i > start {
                sections.push(Section::new(kind, start, i));
            }
            kind = infer_kind(&line.text);
            start = i + 1;
        }
    }
    if start < lines.len() {
        sections.push(Section::new(kind, start, lines.len()));
    }

    sections
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;

    fn lines_from(lyric: &str) -> Vec<Line> {
        split_lines(lyric)
            .into_iter()
            .map(|text| {
                if is_section_title(&text) {
                    Line::title(text)
                } else {
                    Line::content(text, Vec::new())
                }
            })
            .collect()
    }

    #[test]
    fn test_title_detection() {
        assert!(is_section_title("[Chorus]"));
        assert!(is_section_title("  [Verse 2]  "));
        assert!(!is_section_title("[Chorus"));
        assert!(!is_section_title("Chorus]"));
        assert!(!is_section_title("plain lyric line"));
    }

    #[test]
    fn test_kind_inference_priority() {
        assert_eq!(infer_kind("[Pre-Chorus]"), SectionKind::PreChorus);
        assert_eq!(infer_kind("[CHORUS 2]"), SectionKind::Chorus);
        assert_eq!(infer_kind("[bridge]"), SectionKind::Bridge);
        assert_eq!(infer_kind("[Intro]"), SectionKind::Intro);
        assert_eq!(infer_kind("[Outro]"), SectionKind::Outro);
        assert_eq!(infer_kind("[Verse 1]"), SectionKind::Verse);
        assert_eq!(infer_kind("[Hook]"), SectionKind::Verse);
    }

    #[test]
    fn test_segment_two_sections() {
        let lines = lines_from("[Chorus]\nLine one\nLine two\n[Verse]\nLine three");
        let sections = segment(&lines);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], Section::new(SectionKind::Chorus, 1, 3));
        assert_eq!(sections[1], Section::new(SectionKind::Verse, 4, 5));
    }

    #[test]
    fn test_segment_without_tags_is_one_verse() {
        let lines = lines_from("one\ntwo\nthree");
        let sections = segment(&lines);
        assert_eq!(sections, vec![Section::new(SectionKind::Verse, 0, 3)]);
    }

    #[test]
    fn test_segment_leading_untagged_lines() {
        let lines = lines_from("lead in\n[Chorus]\nhook");
        let sections = segment(&lines);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], Section::new(SectionKind::Verse, 0, 1));
        assert_eq!(sections[1], Section::new(SectionKind::Chorus, 2, 3));
    }

    #[test]
    fn test_segment_adjacent_tags_drop_empty_section() {
        let lines = lines_from("[Intro]\n[Verse]\nwords");
        let sections = segment(&lines);
        assert_eq!(sections, vec![Section::new(SectionKind::Verse, 2, 3)]);
    }

    #[test]
    fn test_split_lines_preserves_empties_and_strips_cr() {
        let lines = split_lines("one\r\n\r\ntwo");
        assert_eq!(lines, vec!["one", "", "two"]);
    }
}
