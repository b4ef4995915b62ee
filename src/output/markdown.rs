// Markdown report generation for classification runs.
//
// Writes a small self-contained report so a run's evidence can be kept or
// shared without scrolling back through terminal output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::scoring::{Classification, SimilarityScores};

const FEATURE_NAMES: [&str; 5] = [
    "words",
    "word lengths",
    "stems",
    "sentence lengths",
    "char sequences",
];

fn score_table(scores1: &SimilarityScores, scores2: &SimilarityScores) -> String {
    let a = scores1.as_array();
    let b = scores2.as_array();
    let mut rows = String::from("| Feature | Source 1 | Source 2 |\n|---|---:|---:|\n");
    for ((name, s1), s2) in FEATURE_NAMES.iter().zip(a).zip(b) {
        rows.push_str(&format!("| {name} | {s1:.4} | {s2:.4} |\n"));
    }
    rows
}

/// Render `outcome` as markdown and write it to `path`. Returns the path
/// written, for display.
pub fn generate_report(outcome: &Classification, path: &Path) -> Result<String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut report = String::new();
    report.push_str(&format!("# Attribution report: {}\n\n", outcome.mystery));
    report.push_str(&format!("Generated: {timestamp}\n\n"));
    report.push_str(&format!(
        "Candidates: **{}** (source 1) vs **{}** (source 2)\n\n",
        outcome.source1, outcome.source2
    ));

    report.push_str("## Similarity scores\n\n");
    report.push_str(&score_table(&outcome.scores1, &outcome.scores2));
    report.push_str(&format!(
        "| **weighted sum** | **{:.4}** | **{:.4}** |\n\n",
        outcome.weighted_sum1, outcome.weighted_sum2
    ));

    report.push_str("## Verdict\n\n");
    report.push_str(&format!(
        "`{}` is more likely to have come from **{}**.\n",
        outcome.mystery,
        outcome.winner()
    ));

    fs::write(path, report).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path.display().to_string())
}
