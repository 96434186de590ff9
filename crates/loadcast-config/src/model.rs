//! Model artifact configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dir() -> PathBuf {
    PathBuf::from("models")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Directory holding `scaler.json`, `heating.json` and `cooling.json`.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ModelConfig::default();
        assert_eq!(config.dir, PathBuf::from("models"));
    }
}
