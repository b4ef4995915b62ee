// Similarity scoring and classification.
//
// `compare` turns a pair of feature tables into a log-likelihood score;
// `classify` aggregates the five per-feature scores into the binary
// attribution decision.

pub mod classify;
pub mod compare;

pub use classify::{classify, similarity_scores, Classification, FeatureWeights, SimilarityScores};
pub use compare::{compare_tables, EMPTY_REFERENCE_SCORE};
