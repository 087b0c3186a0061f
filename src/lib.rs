//! `scansion` - heuristic lyric prosody engine.
//!
//! Takes raw multi-line song lyrics and produces, per line, a syllable
//! segmentation, a stress pattern, a classified meter name, and a 0-100
//! regularity score, with section-aware auto-generation of stress
//! patterns and a command surface for interactive manual correction.

// Re-export public modules for use in integration tests and as a library
pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod meter;
pub mod sections;
pub mod session;
pub mod stress;
pub mod syllables;
pub mod types;
