//! Core data model for prosody analysis.
//!
//! These types are produced by the analysis pipeline and consumed by the
//! rendering layer and the save sink. They derive serde traits so callers
//! can persist or transmit them without intermediate conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The structural kind of a lyric section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SectionKind {
    /// Regular verse (the default when no tag keyword is recognized).
    #[default]
    Verse,
    /// Repeated chorus/refrain.
    Chorus,
    /// Contrasting bridge.
    Bridge,
    /// Opening section.
    Intro,
    /// Closing section.
    Outro,
    /// Build-up section preceding a chorus.
    PreChorus,
}

impl SectionKind {
    /// Returns all section kind variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Verse,
            Self::Chorus,
            Self::Bridge,
            Self::Intro,
            Self::Outro,
            Self::PreChorus,
        ]
    }

    /// Returns the human-readable name of this section kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Verse => "Verse",
            Self::Chorus => "Chorus",
            Self::Bridge => "Bridge",
            Self::Intro => "Intro",
            Self::Outro => "Outro",
            Self::PreChorus => "Pre-Chorus",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A contiguous span of lyric lines under one section tag.
///
/// The range is half-open: `start..end` indexes into the analyzed line list.
/// Title lines belong to no section's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Structural kind inferred from the section tag.
    pub kind: SectionKind,
    /// First line index covered by this section (inclusive).
    pub start: usize,
    /// One past the last line index covered by this section.
    pub end: usize,
}

impl Section {
    /// Create a new section over `start..end`.
    #[must_use]
    pub const fn new(kind: SectionKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Check whether a line index falls inside this section.
    #[must_use]
    pub const fn contains(&self, line_index: usize) -> bool {
        line_index >= self.start && line_index < self.end
    }

    /// Number of line slots (including empty placeholder lines) covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the section covers no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// One syllable of a word, with its stress flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// The exact characters of the original token covered by this syllable.
    pub text: String,
    /// Whether this syllable carries metrical stress.
    pub stressed: bool,
}

impl Syllable {
    /// Create a new syllable.
    pub fn new(text: impl Into<String>, stressed: bool) -> Self {
        Self {
            text: text.into(),
            stressed,
        }
    }

    /// The stress mark for this syllable: `'S'` if stressed, `'u'` otherwise.
    #[must_use]
    pub const fn mark(&self) -> char {
        if self.stressed {
            'S'
        } else {
            'u'
        }
    }
}

/// One analyzed lyric line.
///
/// Invariant: `stress_pattern` has exactly one character per syllable, `'S'`
/// for stressed and `'u'` for unstressed, in syllable order. Section-title
/// lines always have empty syllables and an empty pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Original line text, unmodified.
    pub text: String,
    /// Syllable segmentation across all words of the line.
    pub syllables: Vec<Syllable>,
    /// Stress marks, one per syllable.
    pub stress_pattern: String,
    /// Whether this line is a `[Section Title]` tag line.
    pub is_section_title: bool,
}

impl Line {
    /// Create a content line from its text and syllables, deriving the
    /// stress pattern from the syllable flags.
    #[must_use]
    pub fn content(text: impl Into<String>, syllables: Vec<Syllable>) -> Self {
        let mut line = Self {
            text: text.into(),
            syllables,
            stress_pattern: String::new(),
            is_section_title: false,
        };
        line.rebuild_pattern();
        line
    }

    /// Create a section-title line (no syllables, empty pattern).
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            syllables: Vec::new(),
            stress_pattern: String::new(),
            is_section_title: true,
        }
    }

    /// Regenerate `stress_pattern` from the current syllable flags.
    ///
    /// Must be called after any mutation of `syllables[..].stressed` to keep
    /// the pattern invariant intact.
    pub fn rebuild_pattern(&mut self) {
        self.stress_pattern = self.syllables.iter().map(Syllable::mark).collect();
    }

    /// Check whether this line has anything to analyze (not a title, has
    /// at least one syllable).
    #[must_use]
    pub fn has_syllables(&self) -> bool {
        !self.is_section_title && !self.syllables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_mark() {
        assert_eq!(Syllable::new("sun", true).mark(), 'S');
        assert_eq!(Syllable::new("ny", false).mark(), 'u');
    }

    #[test]
    fn test_line_content_derives_pattern() {
        let line = Line::content(
            "sunny day",
            vec![
                Syllable::new("sun", true),
                Syllable::new("ny", false),
                Syllable::new("day", true),
            ],
        );
        assert_eq!(line.stress_pattern, "SuS");
        assert!(line.has_syllables());
    }

    #[test]
    fn test_title_line_is_empty() {
        let line = Line::title("[Chorus]");
        assert!(line.is_section_title);
        assert!(line.syllables.is_empty());
        assert_eq!(line.stress_pattern, "");
        assert!(!line.has_syllables());
    }

    #[test]
    fn test_section_contains() {
        let section = Section::new(SectionKind::Chorus, 1, 3);
        assert!(!section.contains(0));
        assert!(section.contains(1));
        assert!(section.contains(2));
        assert!(!section.contains(3));
        assert_eq!(section.len(), 2);
        assert!(!section.is_empty());
    }
}
