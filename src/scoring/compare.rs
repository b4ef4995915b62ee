// Log-likelihood comparison of two feature tables.
//
// The reference table acts as the probability model; the query table is the
// observed sample being scored against it. Each query occurrence contributes
// ln(reference_count / reference_total), with a fixed pseudo-count of 0.5
// standing in for features the reference has never seen. Keys present only
// in the reference contribute nothing.

use std::hash::Hash;

use crate::model::FeatureTable;

/// Sentinel returned when the reference table is empty — there is no basis
/// for comparison. Not an error.
pub const EMPTY_REFERENCE_SCORE: f64 = -50.0;

/// Pseudo-count applied to query keys absent from the reference.
const SMOOTHING_PSEUDO_COUNT: f64 = 0.5;

/// Score how well `reference` explains `query`. Asymmetric: swapping the
/// arguments gives a different (equally valid) number.
pub fn compare_tables<K>(reference: &FeatureTable<K>, query: &FeatureTable<K>) -> f64
where
    K: Eq + Hash,
{
    if reference.is_empty() {
        return EMPTY_REFERENCE_SCORE;
    }

    // Positive by the table invariant: non-empty tables hold positive counts.
    let total = reference.total() as f64;

    let mut score = 0.0;
    for (key, count) in query.iter() {
        let probability = match reference.get(key) {
            Some(reference_count) => reference_count as f64 / total,
            None => SMOOTHING_PSEUDO_COUNT / total,
        };
        score += count as f64 * probability.ln();
    }

    // The invariants guarantee every log argument is finite and positive;
    // a NaN or infinity here is a bug, not an input condition.
    debug_assert!(score.is_finite(), "non-finite similarity score");

    score
}
