//! Interactive session state and the command reducer.
//!
//! Edits are expressed as commands applied to an immutable session
//! snapshot; each application returns a new session rather than mutating
//! shared state. Persistence goes through the [`SaveSink`] trait so the
//! engine makes no assumption about the storage medium.

use crate::analysis::{analyze, Analysis};
use crate::config::EstimatorConfig;
use crate::error::{Error, Result};
use crate::stress;
use crate::types::{Line, Section};
use std::path::PathBuf;
use tracing::{debug, info};

/// The externally triggerable mutations of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip one syllable's stress flag and recompute the line's pattern.
    ToggleStress {
        /// Index of the line to edit.
        line: usize,
        /// Index of the syllable within the line.
        syllable: usize,
    },
    /// Re-derive all stress flags from the section meter policy.
    AutoAnalyze,
    /// Hand the current lines to the save sink.
    Save,
}

/// Destination for saved lines.
///
/// Implementations decide the persistence medium; the engine only hands
/// over the current snapshot on an explicit `Save` command.
pub trait SaveSink {
    /// Persist the given lines.
    fn save_lines(&mut self, lines: &[Line]) -> Result<()>;
}

/// A sink that discards saves, for drivers that never persist.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SaveSink for NullSink {
    fn save_lines(&mut self, _lines: &[Line]) -> Result<()> {
        Ok(())
    }
}

/// Saves lines as a pretty-printed JSON array to a file.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveSink for JsonFileSink {
    fn save_lines(&mut self, lines: &[Line]) -> Result<()> {
        let json = serde_json::to_string_pretty(lines)?;
        fs_err::write(&self.path, json)
            .map_err(|e| Error::save(format!("{}: {e}", self.path.display())))?;
        info!(path = %self.path.display(), lines = lines.len(), "saved analysis");
        Ok(())
    }
}

/// One analysis session: the current lines, their sections, and whether
/// interactive editing is enabled.
///
/// Commands are applied through [`Session::apply`], which returns a new
/// session; out-of-range or mode-forbidden commands are no-ops rather
/// than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    lines: Vec<Line>,
    sections: Vec<Section>,
    editing: bool,
}

impl Session {
    /// Build a session from a completed analysis run.
    #[must_use]
    pub fn new(analysis: Analysis) -> Self {
        Self {
            lines: analysis.lines,
            sections: analysis.sections,
            editing: false,
        }
    }

    /// Analyze a lyric and open a session over the result.
    #[must_use]
    pub fn from_lyric(lyric: &str, config: &EstimatorConfig) -> Self {
        Self::new(analyze(lyric, config))
    }

    /// The current line snapshot.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The sections of the current snapshot.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Whether interactive editing is enabled.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enable interactive editing.
    pub fn enter_edit(&mut self) {
        self.editing = true;
    }

    /// Disable interactive editing.
    pub fn exit_edit(&mut self) {
        self.editing = false;
    }

    /// Apply a command, returning the resulting session.
    ///
    /// `ToggleStress` and `AutoAnalyze` only act in edit mode and
    /// otherwise return the session unchanged. `Save` hands the current
    /// lines to the sink without mutating anything.
    pub fn apply(&self, command: &Command, sink: &mut dyn SaveSink) -> Result<Self> {
        match *command {
            Command::ToggleStress { line, syllable } => Ok(self.toggled(line, syllable)),
            Command::AutoAnalyze => Ok(self.auto_analyzed()),
            Command::Save => {
                sink.save_lines(&self.lines)?;
                Ok(self.clone())
            }
        }
    }

    /// Flip one syllable's stress, if editing and the indices are valid.
    fn toggled(&self, line_index: usize, syllable_index: usize) -> Self {
        if !self.editing {
            debug!("toggle ignored outside edit mode");
            return self.clone();
        }
        let valid = self
            .lines
            .get(line_index)
            .is_some_and(|line| !line.is_section_title && syllable_index < line.syllables.len());
        if !valid {
            debug!(line_index, syllable_index, "toggle ignored, no such syllable");
            return self.clone();
        }

        let mut next = self.clone();
        let line = &mut next.lines[line_index];
        line.syllables[syllable_index].stressed = !line.syllables[syllable_index].stressed;
        line.rebuild_pattern();
        next
    }

    /// Run the section meter policy over the whole snapshot, if editing.
    fn auto_analyzed(&self) -> Self {
        if !self.editing {
            debug!("auto-analyze ignored outside edit mode");
            return self.clone();
        }
        let mut next = self.clone();
        stress::auto_assign(&mut next.lines, &next.sections);
        next
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    /// Records every save instead of persisting.
    #[derive(Default)]
    struct RecordingSink {
        saves: Vec<Vec<Line>>,
    }

    impl SaveSink for RecordingSink {
        fn save_lines(&mut self, lines: &[Line]) -> Result<()> {
            self.saves.push(lines.to_vec());
            Ok(())
        }
    }

    fn session() -> Session {
        let config = EstimatorConfig::default();
        Session::from_lyric("[Chorus]\nnever let go", &config)
    }

    #[test]
    fn test_toggle_requires_edit_mode() {
        let session = session();
        let mut sink = NullSink;
        let command = Command::ToggleStress { line: 1, syllable: 0 };
        let next = session.apply(&command, &mut sink).unwrap();
        assert_eq!(next, session);
    }

    #[test]
    fn test_toggle_flips_and_rebuilds_pattern() {
        let mut session = session();
        session.enter_edit();
        let mut sink = NullSink;
        let before = session.lines()[1].stress_pattern.clone();

        let command = Command::ToggleStress { line: 1, syllable: 1 };
        let next = session.apply(&command, &mut sink).unwrap();

        let after = &next.lines()[1].stress_pattern;
        assert_ne!(*after, before);
        // Only position 1 changed
        for (i, (a, b)) in before.chars().zip(after.chars()).enumerate() {
            if i == 1 {
                assert_ne!(a, b);
            } else {
                assert_eq!(a, b);
            }
        }
        // Applying the same toggle again restores the original
        let restored = next.apply(&command, &mut sink).unwrap();
        assert_eq!(restored.lines()[1].stress_pattern, before);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut session = session();
        session.enter_edit();
        let mut sink = NullSink;
        for command in [
            Command::ToggleStress { line: 99, syllable: 0 },
            Command::ToggleStress { line: 1, syllable: 99 },
            // Title lines carry no syllables
            Command::ToggleStress { line: 0, syllable: 0 },
        ] {
            let next = session.apply(&command, &mut sink).unwrap();
            assert_eq!(next, session);
        }
    }

    #[test]
    fn test_auto_analyze_requires_edit_mode() {
        let session = session();
        let mut sink = NullSink;
        let next = session.apply(&Command::AutoAnalyze, &mut sink).unwrap();
        assert_eq!(next, session);
    }

    #[test]
    fn test_auto_analyze_overrides_manual_edits() {
        let mut session = session();
        session.enter_edit();
        let mut sink = NullSink;

        let toggled = session
            .apply(&Command::ToggleStress { line: 1, syllable: 0 }, &mut sink)
            .unwrap();
        let analyzed = toggled.apply(&Command::AutoAnalyze, &mut sink).unwrap();

        // Chorus policy: stressed at even syllable indices
        for (i, c) in analyzed.lines()[1].stress_pattern.chars().enumerate() {
            let expected = if i % 2 == 0 { 'S' } else { 'u' };
            assert_eq!(c, expected);
        }
    }

    #[test]
    fn test_save_hands_lines_to_sink_without_mutation() {
        let session = session();
        let mut sink = RecordingSink::default();
        let next = session.apply(&Command::Save, &mut sink).unwrap();
        assert_eq!(next, session);
        assert_eq!(sink.saves.len(), 1);
        assert_eq!(sink.saves[0], session.lines());
    }

    #[test]
    fn test_json_file_sink_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.json");
        let session = session();

        let mut sink = JsonFileSink::new(&path);
        session.apply(&Command::Save, &mut sink).unwrap();

        let written = fs_err::read_to_string(&path).unwrap();
        let loaded: Vec<Line> = serde_json::from_str(&written).unwrap();
        assert_eq!(loaded, session.lines());
    }
}
