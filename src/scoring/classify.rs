// The attribution decision: five per-feature similarity scores, a weighted
// sum per candidate source, and a winner.
//
// Weights default to 10.0 for every feature. They are a tuning point, not a
// law — the CLI lets them be overridden from the environment so experiments
// don't require code changes.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::compare::compare_tables;
use crate::model::TextModel;

/// Per-feature weights applied to the similarity score vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub words: f64,
    pub word_lengths: f64,
    pub stems: f64,
    pub sentence_lengths: f64,
    pub char_sequences: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            words: 10.0,
            word_lengths: 10.0,
            stems: 10.0,
            sentence_lengths: 10.0,
            char_sequences: 10.0,
        }
    }
}

impl FeatureWeights {
    /// Parse weights from a comma-separated list of five numbers, in feature
    /// order: words, word lengths, stems, sentence lengths, char sequences.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 5 {
            bail!(
                "Expected five comma-separated weights (words, word lengths, stems, \
                 sentence lengths, char sequences), got {}",
                parts.len()
            );
        }

        let mut values = [0.0f64; 5];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid weight '{part}' — expected a number"))?;
        }

        Ok(Self {
            words: values[0],
            word_lengths: values[1],
            stems: values[2],
            sentence_lengths: values[3],
            char_sequences: values[4],
        })
    }

    /// Collapse a score vector into the scalar decision statistic.
    pub fn weighted_sum(&self, scores: &SimilarityScores) -> f64 {
        self.words * scores.words
            + self.word_lengths * scores.word_lengths
            + self.stems * scores.stems
            + self.sentence_lengths * scores.sentence_lengths
            + self.char_sequences * scores.char_sequences
    }
}

/// The five per-feature similarity scores, in fixed feature order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    pub words: f64,
    pub word_lengths: f64,
    pub stems: f64,
    pub sentence_lengths: f64,
    pub char_sequences: f64,
}

impl SimilarityScores {
    /// The scores as an array in feature order, for display.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.words,
            self.word_lengths,
            self.stems,
            self.sentence_lengths,
            self.char_sequences,
        ]
    }
}

/// Score `mystery` against `source` feature by feature.
///
/// The source acts as the reference (probability model) and the mystery as
/// the query in every comparison.
pub fn similarity_scores(mystery: &TextModel, source: &TextModel) -> SimilarityScores {
    SimilarityScores {
        words: compare_tables(&source.words, &mystery.words),
        word_lengths: compare_tables(&source.word_lengths, &mystery.word_lengths),
        stems: compare_tables(&source.stems, &mystery.stems),
        sentence_lengths: compare_tables(&source.sentence_lengths, &mystery.sentence_lengths),
        char_sequences: compare_tables(&source.char_sequences, &mystery.char_sequences),
    }
}

/// The full outcome of a classification — both score vectors, both weighted
/// sums, and the names involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub mystery: String,
    pub source1: String,
    pub source2: String,
    pub scores1: SimilarityScores,
    pub scores2: SimilarityScores,
    pub weighted_sum1: f64,
    pub weighted_sum2: f64,
}

impl Classification {
    /// Name of the more likely source. Only a strictly higher weighted sum
    /// lets source1 win; ties go to source2.
    pub fn winner(&self) -> &str {
        if self.weighted_sum1 > self.weighted_sum2 {
            &self.source1
        } else {
            &self.source2
        }
    }
}

/// Decide which of two candidate sources the mystery model more likely
/// derives from.
pub fn classify(
    mystery: &TextModel,
    source1: &TextModel,
    source2: &TextModel,
    weights: &FeatureWeights,
) -> Classification {
    let scores1 = similarity_scores(mystery, source1);
    let scores2 = similarity_scores(mystery, source2);

    let weighted_sum1 = weights.weighted_sum(&scores1);
    let weighted_sum2 = weights.weighted_sum(&scores2);

    let outcome = Classification {
        mystery: mystery.name().to_string(),
        source1: source1.name().to_string(),
        source2: source2.name().to_string(),
        scores1,
        scores2,
        weighted_sum1,
        weighted_sum2,
    };

    info!(
        mystery = %outcome.mystery,
        sum1 = weighted_sum1,
        sum2 = weighted_sum2,
        winner = outcome.winner(),
        "Classification complete"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, text: &str) -> TextModel {
        let mut m = TextModel::new(name);
        m.add_text(text);
        m
    }

    #[test]
    fn default_weights_are_ten_everywhere() {
        let weights = FeatureWeights::default();
        let unit = SimilarityScores {
            words: 1.0,
            word_lengths: 1.0,
            stems: 1.0,
            sentence_lengths: 1.0,
            char_sequences: 1.0,
        };
        assert_eq!(weights.weighted_sum(&unit), 50.0);
    }

    #[test]
    fn parse_accepts_five_numbers() {
        let weights = FeatureWeights::parse("1, 2,3 ,4,5.5").unwrap();
        assert_eq!(weights.words, 1.0);
        assert_eq!(weights.word_lengths, 2.0);
        assert_eq!(weights.stems, 3.0);
        assert_eq!(weights.sentence_lengths, 4.0);
        assert_eq!(weights.char_sequences, 5.5);
    }

    #[test]
    fn parse_rejects_wrong_arity_and_garbage() {
        assert!(FeatureWeights::parse("1,2,3").is_err());
        assert!(FeatureWeights::parse("1,2,3,4,five").is_err());
    }

    #[test]
    fn scores_use_source_as_reference() {
        let mystery = model("mystery", "Completely novel vocabulary here.");
        let empty_source = TextModel::new("empty");
        let scores = similarity_scores(&mystery, &empty_source);
        // Empty reference tables hit the sentinel on all five features
        assert_eq!(scores.as_array(), [-50.0; 5]);
    }

    #[test]
    fn matching_source_wins() {
        let source1 = model(
            "austen",
            "It is a truth universally acknowledged, that a single man in possession \
             of a good fortune, must be in want of a wife. The family were delighted.",
        );
        let source2 = model(
            "manual",
            "Insert tab A into slot B. Tighten the retaining bolt to the specified \
             torque. Verify clearance before operation.",
        );
        let mystery = model(
            "unknown",
            "It is a truth that the family must be in want of a good fortune.",
        );

        let outcome = classify(&mystery, &source1, &source2, &FeatureWeights::default());
        assert_eq!(outcome.winner(), "austen");
    }

    #[test]
    fn tie_goes_to_source2() {
        // Identical sources produce identical weighted sums
        let text = "The same corpus for both candidates. Every table matches!";
        let source1 = model("first", text);
        let source2 = model("second", text);
        let mystery = model("mystery", "Some other corpus entirely. Quite different!");

        let outcome = classify(&mystery, &source1, &source2, &FeatureWeights::default());
        assert_eq!(outcome.weighted_sum1, outcome.weighted_sum2);
        assert_eq!(outcome.winner(), "second");
    }

    #[test]
    fn zero_weights_force_the_tie_break() {
        let source1 = model("a", "One corpus of words here.");
        let source2 = model("b", "A different corpus there.");
        let mystery = model("m", "Mystery text goes here.");

        let zero = FeatureWeights::parse("0,0,0,0,0").unwrap();
        let outcome = classify(&mystery, &source1, &source2, &zero);
        assert_eq!(outcome.weighted_sum1, 0.0);
        assert_eq!(outcome.weighted_sum2, 0.0);
        assert_eq!(outcome.winner(), "b");
    }
}
