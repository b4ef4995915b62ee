// Text sources — where raw corpus text comes from.
//
// The model ingests through the TextSource trait so that tests can feed
// literal strings and the CLI can feed files. File reads are best-effort on
// encoding: undecodable byte sequences are dropped rather than aborting the
// whole ingestion.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A named source of raw text.
pub trait TextSource {
    /// Human-readable label for logs and error messages.
    fn label(&self) -> &str;

    /// Read the full content of the source.
    fn read_text(&self) -> Result<String>;
}

/// A text file on disk.
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        // Lossy decode marks invalid sequences with U+FFFD; strip those so
        // undecodable bytes are skipped instead of becoming fake characters.
        let text = String::from_utf8_lossy(&bytes)
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect();

        Ok(text)
    }
}

/// An in-memory source, mainly for tests and ad-hoc ingestion.
pub struct StringSource {
    label: String,
    text: String,
}

impl StringSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl TextSource for StringSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
