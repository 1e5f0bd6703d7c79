// Corpus: the documents of one run plus the graph built from them.

use std::collections::BTreeSet;
use std::io::BufRead;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::document::Document;
use crate::graph::builder::SimilarityGraphBuilder;
use crate::graph::params::SimilarityParams;
use crate::graph::similarity::qualifying_shared_words;
use crate::graph::SimilarityGraph;

/// Everything a run produces: per-document profiles and the similarity graph.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Documents in input order (same order as the graph's vertices)
    pub documents: Vec<Document>,
    pub graph: SimilarityGraph,
    pub params: SimilarityParams,
}

impl Corpus {
    /// Build the graph over fully-counted documents.
    ///
    /// # Panics
    ///
    /// Panics if two documents share an identifier.
    pub fn from_documents(documents: Vec<Document>, params: SimilarityParams) -> Self {
        let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
        let graph = SimilarityGraphBuilder::new(params).build(&ids, &documents);
        Self {
            documents,
            graph,
            params,
        }
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// The qualifying words two documents share, or `None` if either is unknown.
    pub fn shared_words(&self, a: &str, b: &str) -> Option<BTreeSet<&str>> {
        let doc_a = self.document(a)?;
        let doc_b = self.document(b)?;
        Some(qualifying_shared_words(
            &doc_a.frequencies,
            &doc_b.frequencies,
            self.params.min_word_len,
        ))
    }
}

/// Count every `(id, reader)` source in order, showing a progress bar.
///
/// Sources are pulled one at a time and each reader is dropped once its
/// document is counted, so a lazy iterator keeps a single file open. Stops at
/// the first open or read failure; nothing counted so far is returned.
pub fn count_documents<I, R>(sources: I) -> Result<Vec<Document>>
where
    I: IntoIterator<Item = Result<(String, R)>>,
    I::IntoIter: ExactSizeIterator,
    R: BufRead,
{
    let sources = sources.into_iter();
    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar().template("  Counting [{bar:30}] {pos}/{len} {msg}")?,
    );

    let mut documents = Vec::with_capacity(sources.len());
    for source in sources {
        let document = match source.and_then(|(id, reader)| {
            pb.set_message(id.clone());
            Document::from_reader(id, reader)
        }) {
            Ok(document) => document,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        debug!(
            id = document.id,
            distinct_words = document.frequencies.len(),
            total_words = document.frequencies.total(),
            "Counted document"
        );
        documents.push(document);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(documents = documents.len(), "Counted all documents");
    Ok(documents)
}

/// Run the whole pipeline: count every source, then build the graph.
pub fn run<I, R>(sources: I, params: SimilarityParams) -> Result<Corpus>
where
    I: IntoIterator<Item = Result<(String, R)>>,
    I::IntoIter: ExactSizeIterator,
    R: BufRead,
{
    let documents = count_documents(sources)?;
    Ok(Corpus::from_documents(documents, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::{self, Read};
    use std::rc::Rc;

    fn source(id: &str, text: &'static str) -> Result<(String, &'static [u8])> {
        Ok((id.to_string(), text.as_bytes()))
    }

    /// Reader that records how many instances are alive at once.
    struct TrackedReader {
        text: &'static [u8],
        open: Rc<Cell<usize>>,
        peak: Rc<Cell<usize>>,
    }

    impl TrackedReader {
        fn open(text: &'static str, open: &Rc<Cell<usize>>, peak: &Rc<Cell<usize>>) -> Self {
            open.set(open.get() + 1);
            peak.set(peak.get().max(open.get()));
            Self {
                text: text.as_bytes(),
                open: Rc::clone(open),
                peak: Rc::clone(peak),
            }
        }
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.open.set(self.open.get() - 1);
        }
    }

    impl Read for TrackedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.text.read(buf)
        }
    }

    impl BufRead for TrackedReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.text.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.text.consume(amt)
        }
    }

    #[test]
    fn test_run_keeps_input_order() {
        let corpus = run(
            vec![source("b.txt", "one two"), source("a.txt", "three")],
            SimilarityParams::default(),
        )
        .unwrap();
        assert_eq!(corpus.graph.vertices(), &["b.txt", "a.txt"]);
        assert_eq!(corpus.documents[0].id, "b.txt");
        assert_eq!(corpus.documents[1].frequencies.get("three"), Some(1));
    }

    #[test]
    fn test_run_fails_on_unreadable_document() {
        let sources: Vec<Result<(String, &[u8])>> = vec![
            Ok(("good".to_string(), b"fine text".as_slice())),
            Ok(("bad".to_string(), b"\xc3\x28 invalid".as_slice())),
        ];
        let err = run(sources, SimilarityParams::default()).unwrap_err();
        assert!(format!("{err:#}").contains("bad"), "got: {err:#}");
    }

    #[test]
    fn test_open_failure_stops_the_run() {
        let sources: Vec<Result<(String, &[u8])>> = vec![
            source("first", "some words"),
            Err(anyhow::anyhow!("Failed to open second")),
            source("third", "never counted"),
        ];
        let err = count_documents(sources).unwrap_err();
        assert!(err.to_string().contains("second"));
    }

    #[test]
    fn test_one_reader_open_at_a_time() {
        let open = Rc::new(Cell::new(0));
        let peak = Rc::new(Cell::new(0));
        let texts = ["granite marble", "marble basalt", "basalt slate", "slate granite"];

        let sources = texts.iter().enumerate().map(|(i, &text)| {
            Ok::<_, anyhow::Error>((format!("doc{i}"), TrackedReader::open(text, &open, &peak)))
        });
        let documents = count_documents(sources).unwrap();

        assert_eq!(documents.len(), 4);
        assert_eq!(documents[3].frequencies.get("granite"), Some(1));
        assert_eq!(peak.get(), 1);
        assert_eq!(open.get(), 0);
    }

    #[test]
    fn test_shared_words_lookup() {
        let corpus = Corpus::from_documents(
            vec![
                Document::from_lines("x", ["Marble granite basalt"]),
                Document::from_lines("y", ["granite MARBLE slate"]),
            ],
            SimilarityParams::default(),
        );
        let shared: Vec<&str> = corpus.shared_words("x", "y").unwrap().into_iter().collect();
        assert_eq!(shared, vec!["granite", "marble"]);
        assert!(corpus.shared_words("x", "missing").is_none());
    }
}
