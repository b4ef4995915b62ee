// Model persistence — five JSON files per model.
//
// A model named N is stored as N_words.json, N_word_lengths.json,
// N_stems.json, N_sentence_lengths.json and N_char_sequences.json inside the
// model directory. Each file is a plain JSON object of key → count, parsed
// back through serde. Malformed files fail with a parse error naming the
// offending path; partial data is never silently accepted.

use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use super::{FeatureTable, TextModel};

/// Path of one persisted feature table.
fn table_path(dir: &Path, name: &str, feature: &str) -> PathBuf {
    dir.join(format!("{name}_{feature}.json"))
}

fn write_table<K>(dir: &Path, name: &str, feature: &str, table: &FeatureTable<K>) -> Result<()>
where
    K: Eq + Hash + Serialize,
{
    let path = table_path(dir, name, feature);
    let json = serde_json::to_string_pretty(table)
        .with_context(|| format!("Failed to serialize the {feature} table of model '{name}'"))?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn read_table<K>(dir: &Path, name: &str, feature: &str) -> Result<FeatureTable<K>>
where
    K: Eq + Hash + DeserializeOwned,
{
    let path = table_path(dir, name, feature);
    let json = fs::read_to_string(&path).with_context(|| {
        format!(
            "Failed to read {} — has model '{name}' been built?",
            path.display()
        )
    })?;
    serde_json::from_str(&json)
        .with_context(|| format!("Corrupt feature table at {}", path.display()))
}

/// Persist all five tables of `model` into `dir` (created if missing).
pub fn save_model(model: &TextModel, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory {}", dir.display()))?;

    let name = model.name();
    write_table(dir, name, "words", &model.words)?;
    write_table(dir, name, "word_lengths", &model.word_lengths)?;
    write_table(dir, name, "stems", &model.stems)?;
    write_table(dir, name, "sentence_lengths", &model.sentence_lengths)?;
    write_table(dir, name, "char_sequences", &model.char_sequences)?;

    info!(model = name, dir = %dir.display(), "Model saved");
    Ok(())
}

/// Restore a model named `name` from `dir`. All five tables must be present
/// and well-formed.
pub fn load_model(name: &str, dir: &Path) -> Result<TextModel> {
    let mut model = TextModel::new(name);
    model.words = read_table(dir, name, "words")?;
    model.word_lengths = read_table(dir, name, "word_lengths")?;
    model.stems = read_table(dir, name, "stems")?;
    model.sentence_lengths = read_table(dir, name, "sentence_lengths")?;
    model.char_sequences = read_table(dir, name, "char_sequences")?;

    info!(model = name, dir = %dir.display(), "Model loaded");
    Ok(model)
}

/// Whether a persisted model named `name` exists in `dir`.
///
/// Checks the words table only; a model with some tables missing is treated
/// as present so that `load_model` can surface the real error.
pub fn model_exists(name: &str, dir: &Path) -> bool {
    table_path(dir, name, "words").exists()
}
