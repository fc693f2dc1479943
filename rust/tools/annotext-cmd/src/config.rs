//! JSON pipeline configuration.

use std::fs;
use std::path::Path;

use annotext_analysis::{
    StopWords, TokenizerType, create_tokenizer_with_lengths,
    tokenizers::{DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH},
};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Pipeline settings read from a `--config` file.
///
/// Every field is optional; command-line flags take precedence over the file.
///
/// ```json
/// {
///   "tokenizer": "unicode-word",
///   "max_term_length": 64,
///   "stop_words": ["the", "and"],
///   "ignore_case": true,
///   "markers": [0, 3, 5, 2]
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub tokenizer: Option<String>,
    pub max_term_length: Option<usize>,
    pub min_term_length: Option<usize>,
    pub stop_words: Vec<String>,
    pub ignore_case: bool,
    pub markers: Vec<u32>,
    /// Built-in annotator name (`colors` or `animals`).
    pub annotator: Option<String>,
    /// Vocabulary of a custom one-word annotator.
    pub words: Vec<String>,
}

impl PipelineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<PipelineConfig> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("loaded pipeline config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Loads the file if a path is given, falling back to the defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<PipelineConfig> {
        path.map_or_else(|| Ok(PipelineConfig::default()), PipelineConfig::load)
    }

    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.as_deref().unwrap_or("whitespace")
    }

    pub fn create_tokenizer(&self) -> Result<TokenizerType> {
        let name = self.tokenizer_name();
        create_tokenizer_with_lengths(
            name,
            self.max_term_length.unwrap_or(DEFAULT_MAX_TERM_LENGTH),
            self.min_term_length.unwrap_or(DEFAULT_MIN_TERM_LENGTH),
        )
        .with_context(|| format!("Failed to create tokenizer '{name}'"))
    }

    pub fn stop_words(&self) -> Option<StopWords> {
        (!self.stop_words.is_empty()).then(|| StopWords::new(&self.stop_words, self.ignore_case))
    }
}

/// Parses a comma-separated marker list such as `"0,3,5,2"`.
pub fn parse_markers(s: &str) -> Result<Vec<u32>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .with_context(|| format!("Invalid annotation marker: '{part}'"))
        })
        .collect()
}
