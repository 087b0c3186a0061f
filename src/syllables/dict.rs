//! Built-in stress dictionary for common lyric vocabulary.
//!
//! Each entry maps a cleaned (lowercase, letters-only) word to its
//! stress-per-syllable pattern; the syllable count is the pattern length.
//! The table seeds [`EstimatorConfig::default`](crate::config::EstimatorConfig);
//! callers wanting a controlled vocabulary inject their own table instead.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Single unstressed syllable (function words).
const UNSTRESSED: &[bool] = &[false];
/// Single stressed syllable (content words).
const STRESSED: &[bool] = &[true];
/// Two syllables, stress-initial.
const TROCHEE: &[bool] = &[true, false];
/// Two syllables, stress-final.
const IAMB: &[bool] = &[false, true];
/// Three syllables, stress-initial.
const DACTYL: &[bool] = &[true, false, false];
/// Three syllables, stress-medial.
const AMPHIBRACH: &[bool] = &[false, true, false];

lazy_static! {
    /// Stress patterns for common words, keyed by cleaned form.
    pub static ref COMMON_WORDS: HashMap<&'static str, &'static [bool]> = {
        let mut map: HashMap<&'static str, &'static [bool]> = HashMap::new();

        // Monosyllabic function words (articles, prepositions, pronouns)
        for word in [
            "the", "a", "an", "and", "but", "or", "nor", "of", "to", "in",
            "on", "at", "for", "with", "from", "by", "as", "is", "are",
            "was", "were", "am", "be", "been", "it", "its", "my", "your",
            "his", "her", "our", "their", "them", "us", "we", "you", "i",
            "me", "so", "if", "than", "that", "this",
        ] {
            map.insert(word, UNSTRESSED);
        }

        // Monosyllabic content words
        for word in [
            "love", "heart", "night", "day", "light", "dark", "sun",
            "moon", "star", "sky", "rain", "fire", "dream", "time",
            "life", "world", "home", "road", "soul", "eyes", "tears",
            "hold", "fall", "fly", "run", "sing", "song", "dance",
            "break", "cold", "gold", "blue", "true", "free", "young",
            "old", "long", "gone", "name", "pain", "flame", "grace",
            "face", "place", "sweet", "wild", "lost", "found", "stay",
            "go", "know", "way", "say", "take", "make", "give", "feel",
            "hand", "mind", "strong", "wrong", "right", "high", "low",
            "deep", "far", "near", "here", "there", "now", "through",
            "still", "more", "once",
        ] {
            map.insert(word, STRESSED);
        }

        // Two syllables, stress on the first
        for word in [
            "never", "ever", "always", "over", "under", "morning",
            "evening", "heaven", "angel", "broken", "golden", "shadow",
            "sorrow", "thunder", "lightning", "river", "mountain",
            "ocean", "music", "rhythm", "fallen", "burning", "falling",
            "calling", "singing", "dancing", "crying", "dying", "lonely",
            "empty", "body", "woman", "water", "fading", "rising",
            "midnight", "sunshine", "moonlight", "darkness", "freedom",
            "spirit", "story", "glory", "mercy", "honey", "baby",
            "maybe", "little", "gentle", "trouble", "open", "only",
        ] {
            map.insert(word, TROCHEE);
        }

        // Two syllables, stress on the second
        for word in [
            "again", "away", "alone", "along", "believe", "before",
            "behind", "below", "above", "tonight", "today", "goodbye",
            "hello", "return", "desire", "without", "until", "upon",
            "between", "beyond", "become", "alive", "inside",
        ] {
            map.insert(word, IAMB);
        }

        // Three syllables, stress on the first
        for word in [
            "beautiful", "memory", "melody", "harmony", "destiny",
            "yesterday", "everything", "anything", "wonderful",
        ] {
            map.insert(word, DACTYL);
        }

        // Three syllables, stress on the second
        for word in [
            "forever", "together", "remember", "tomorrow", "whatever",
            "another", "beginning", "imagine", "emotion", "horizon",
        ] {
            map.insert(word, AMPHIBRACH);
        }

        // Longer words with irregular stress
        map.insert("eternity", &[false, true, false, false]);
        map.insert("hallelujah", &[false, false, true, false]);
        map.insert("paradise", DACTYL);

        map
    };
}
