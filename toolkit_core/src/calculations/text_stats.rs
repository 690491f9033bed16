//! # Word Counter
//!
//! Word, character, sentence, and paragraph counts for free-form text.
//!
//! - Words: whitespace-delimited non-empty tokens
//! - Characters: every char, whitespace included
//! - Sentences: segments split on `.` `!` `?`, where runs of punctuation
//!   collapse to one delimiter and whitespace-only segments do not count
//! - Paragraphs: runs of non-blank lines, where one or more blank
//!   (whitespace-only) lines separate paragraphs
//!
//! This is a total function; empty input yields all-zero counts.

use serde::{Deserialize, Serialize};

/// Text statistics.
///
/// ## JSON Example
///
/// ```json
/// {
///   "words": 7,
///   "characters": 42,
///   "sentences": 3,
///   "paragraphs": 2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

/// Count words, characters, sentences, and paragraphs.
pub fn analyze(text: &str) -> TextStats {
    let words = text.split_whitespace().count();
    let characters = text.chars().count();

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count();

    // A paragraph is a maximal run of non-blank lines.
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }

    TextStats {
        words,
        characters,
        sentences,
        paragraphs,
    }
}
