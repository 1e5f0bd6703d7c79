use std::io::BufRead;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::text::frequency::{count_lines, count_reader, FrequencyMap};

/// One input document: its identifier and finished word counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Unique within a run (the input's file name for CLI runs)
    pub id: String,
    pub frequencies: FrequencyMap,
}

impl Document {
    pub fn new(id: impl Into<String>, frequencies: FrequencyMap) -> Self {
        Self {
            id: id.into(),
            frequencies,
        }
    }

    /// Count an in-memory document.
    pub fn from_lines<I, S>(id: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(id, count_lines(lines))
    }

    /// Count a document read line by line from `reader`.
    pub fn from_reader<R: BufRead>(id: impl Into<String>, reader: R) -> Result<Self> {
        let id = id.into();
        let frequencies =
            count_reader(reader).with_context(|| format!("Failed to read document {id}"))?;
        Ok(Self::new(id, frequencies))
    }
}

impl AsRef<FrequencyMap> for Document {
    fn as_ref(&self) -> &FrequencyMap {
        &self.frequencies
    }
}
