use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::graph::params::{SimilarityParams, DEFAULT_MIN_WORD_LEN, DEFAULT_SHARED_WORD_THRESHOLD};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Shared qualifying words needed for an edge (TEXTGRAPH_SHARED_WORDS)
    pub shared_word_threshold: usize,
    /// Minimum qualifying word length in characters (TEXTGRAPH_MIN_WORD_LEN)
    pub min_word_len: usize,
    /// Where to write the graph export when `-o` is not given (TEXTGRAPH_OUTPUT_DIR)
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shared_word_threshold: DEFAULT_SHARED_WORD_THRESHOLD,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            output_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset means the built-in default.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` uses the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            shared_word_threshold: parse_positive(
                &lookup,
                "TEXTGRAPH_SHARED_WORDS",
                defaults.shared_word_threshold,
            )?,
            min_word_len: parse_positive(&lookup, "TEXTGRAPH_MIN_WORD_LEN", defaults.min_word_len)?,
            output_dir: lookup("TEXTGRAPH_OUTPUT_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Similarity parameters, with optional command-line overrides applied.
    pub fn similarity_params(
        &self,
        threshold: Option<usize>,
        min_word_len: Option<usize>,
    ) -> Result<SimilarityParams> {
        let params = SimilarityParams {
            shared_word_threshold: threshold.unwrap_or(self.shared_word_threshold),
            min_word_len: min_word_len.unwrap_or(self.min_word_len),
        };
        if params.shared_word_threshold == 0 || params.min_word_len == 0 {
            anyhow::bail!("--threshold and --min-word-len must both be at least 1");
        }
        Ok(params)
    }
}

fn parse_positive<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        return Ok(default);
    };
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a positive whole number, got {raw:?}"))?;
    if value == 0 {
        anyhow::bail!("{key} must be at least 1");
    }
    Ok(value)
}
