// Colored terminal output for model summaries and classification reports.
//
// This module handles all terminal-specific formatting: colors, alignment,
// the verdict line. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::model::TextModel;
use crate::scoring::{Classification, SimilarityScores};

/// Display a model summary: its name and the size of each feature table.
pub fn display_model(model: &TextModel) {
    println!("\n{}", format!("=== Model: {} ===", model.name()).bold());
    println!("  {:<28} {:>8}", "Distinct words:", model.words.len());
    println!(
        "  {:<28} {:>8}",
        "Distinct word lengths:",
        model.word_lengths.len()
    );
    println!("  {:<28} {:>8}", "Distinct stems:", model.stems.len());
    println!(
        "  {:<28} {:>8}",
        "Distinct sentence lengths:",
        model.sentence_lengths.len()
    );
    println!(
        "  {:<28} {:>8}",
        "Distinct char sequences:",
        model.char_sequences.len()
    );
    println!(
        "  {:<28} {:>8}",
        "Words ingested:".dimmed(),
        model.words.total()
    );
}

/// Display a five-component score vector with its weighted sum.
pub fn display_scores(label: &str, scores: &SimilarityScores) {
    println!("  {}", format!("Scores against {label}:").bold());
    println!("    {:<20} {:>12.4}", "words", scores.words);
    println!("    {:<20} {:>12.4}", "word lengths", scores.word_lengths);
    println!("    {:<20} {:>12.4}", "stems", scores.stems);
    println!(
        "    {:<20} {:>12.4}",
        "sentence lengths", scores.sentence_lengths
    );
    println!("    {:<20} {:>12.4}", "char sequences", scores.char_sequences);
}

/// Display the full classification report: both score vectors, both weighted
/// sums, and the verdict.
pub fn display_classification(outcome: &Classification) {
    println!(
        "\n{}",
        format!("=== Attribution for '{}' ===", outcome.mystery).bold()
    );
    println!();

    display_scores(&outcome.source1, &outcome.scores1);
    println!(
        "    {:<20} {:>12.4}\n",
        "weighted sum".dimmed(),
        outcome.weighted_sum1
    );

    display_scores(&outcome.source2, &outcome.scores2);
    println!(
        "    {:<20} {:>12.4}\n",
        "weighted sum".dimmed(),
        outcome.weighted_sum2
    );

    let winner = outcome.winner();
    let margin = (outcome.weighted_sum1 - outcome.weighted_sum2).abs();
    println!(
        "  {} is more likely to have come from {}",
        outcome.mystery.bold(),
        winner.green().bold()
    );
    println!("  {}", format!("(margin: {margin:.4})").dimmed());
}
