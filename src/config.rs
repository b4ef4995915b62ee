use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::FeatureWeights;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so local
/// overrides never need to be exported by hand.
pub struct Config {
    /// Directory where persisted models live (GRAPHITE_MODEL_DIR).
    pub model_dir: PathBuf,
    /// Feature weights for classification (GRAPHITE_WEIGHTS, five
    /// comma-separated numbers). Defaults to 10 for every feature.
    pub weights: FeatureWeights,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; a malformed GRAPHITE_WEIGHTS value is the
    /// only way loading can fail.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("GRAPHITE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        let weights = match env::var("GRAPHITE_WEIGHTS") {
            Ok(spec) => FeatureWeights::parse(&spec)
                .context("Invalid GRAPHITE_WEIGHTS in the environment")?,
            Err(_) => FeatureWeights::default(),
        };

        Ok(Self { model_dir, weights })
    }
}

/// Platform-appropriate default location for persisted models, falling back
/// to a directory next to the working directory when no data dir exists.
fn default_model_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("graphite").join("models"))
        .unwrap_or_else(|| PathBuf::from("./graphite-models"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_when_env_unset() {
        // The test runner environment doesn't set GRAPHITE_WEIGHTS
        let weights = FeatureWeights::default();
        assert_eq!(weights.words, 10.0);
    }

    #[test]
    fn weight_spec_parses_like_config_would() {
        let weights = FeatureWeights::parse("10,10,10,10,10").unwrap();
        assert_eq!(weights, FeatureWeights::default());
    }
}
