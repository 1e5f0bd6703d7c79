// JSON export of a finished corpus, for graph-visualization tools.
//
// Words are written through a BTreeMap and edges in vertex order, so the same
// input always yields byte-identical output.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::graph::params::SimilarityParams;
use crate::pipeline::corpus::Corpus;

/// File name written inside the output directory.
pub const EXPORT_FILE_NAME: &str = "graph.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub params: SimilarityParams,
    pub documents: Vec<DocumentExport>,
    pub edges: Vec<EdgeExport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExport {
    pub id: String,
    pub total_words: u64,
    pub words: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeExport {
    pub source: String,
    pub target: String,
}

impl GraphExport {
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let documents = corpus
            .documents
            .iter()
            .map(|doc| DocumentExport {
                id: doc.id.clone(),
                total_words: doc.frequencies.total(),
                words: doc
                    .frequencies
                    .iter()
                    .map(|(w, c)| (w.to_string(), c))
                    .collect(),
            })
            .collect();

        let edges = corpus
            .graph
            .edges()
            .into_iter()
            .map(|(a, b)| EdgeExport {
                source: a.to_string(),
                target: b.to_string(),
            })
            .collect();

        Self {
            params: corpus.params,
            documents,
            edges,
        }
    }
}

/// Write `graph.json` into `dir`, returning the path written.
pub fn write_export(corpus: &Corpus, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(&GraphExport::from_corpus(corpus))?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Wrote graph export");
    Ok(path)
}
