// TextModel — the statistical fingerprint of one text corpus.
//
// A model is five independent frequency tables built over the same text:
// words, word lengths, stems, sentence lengths, and character trigrams.
// Word-derived features count the cleaned token stream; sentence lengths and
// character sequences are extracted from the text with only newlines
// removed, since sentence splitting needs the punctuation intact.

pub mod store;
pub mod table;

use anyhow::{Context, Result};
use tracing::info;

use crate::corpus::TextSource;
use crate::text::{char_ngrams, clean_text, sentence_lengths, stem};
pub use table::FeatureTable;

/// Window length for the character-sequence feature.
pub const CHAR_WINDOW: usize = 3;

/// A named feature model. Created empty, populated by one or more ingestion
/// calls, then consumed read-only by scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct TextModel {
    name: String,
    pub words: FeatureTable<String>,
    pub word_lengths: FeatureTable<usize>,
    pub stems: FeatureTable<String>,
    pub sentence_lengths: FeatureTable<usize>,
    pub char_sequences: FeatureTable<String>,
}

impl TextModel {
    /// Create an empty model with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: FeatureTable::new(),
            word_lengths: FeatureTable::new(),
            stems: FeatureTable::new(),
            sentence_lengths: FeatureTable::new(),
            char_sequences: FeatureTable::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fold one string of raw text into all five tables.
    ///
    /// Accumulation is monotonic: counts only grow, keys are never removed.
    /// Ingesting the same text twice doubles every count exactly.
    pub fn add_text(&mut self, text: &str) {
        // Newlines go first so line breaks never split a character window.
        // This joins words across line boundaries, which is intentional.
        let flat = text.replace('\n', "");

        for length in sentence_lengths(&flat) {
            self.sentence_lengths.increment(length);
        }

        for sequence in char_ngrams(&flat, CHAR_WINDOW) {
            self.char_sequences.increment(sequence);
        }

        for word in clean_text(&flat) {
            self.word_lengths.increment(word.chars().count());
            self.stems.increment(stem(&word));
            self.words.increment(word);
        }
    }

    /// Ingest the full content of an external text source.
    pub fn add_source(&mut self, source: &dyn TextSource) -> Result<()> {
        let text = source
            .read_text()
            .with_context(|| format!("Failed to read text source '{}'", source.label()))?;

        info!(
            model = %self.name,
            source = source.label(),
            chars = text.len(),
            "Ingesting text source"
        );

        self.add_text(&text);
        Ok(())
    }
}
