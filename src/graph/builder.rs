// Builds the similarity graph from per-document frequency profiles.
//
// Two forms produce identical graphs:
//   - `build_reference` evaluates every ordered pair (i, j), so each
//     unordered pair is examined twice, collecting the full shared-word set
//     each time.
//   - `build` evaluates each unordered pair once and stops counting as soon
//     as the threshold is reached.
// The reference form exists to pin down the behavior the fast form must
// match; the pipeline uses `build`.

use tracing::{debug, info};

use super::params::SimilarityParams;
use super::similarity::{is_similar, qualifying_shared_words};
use super::SimilarityGraph;
use crate::text::frequency::FrequencyMap;

/// Turns document identifiers plus their frequency profiles into a graph.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraphBuilder {
    params: SimilarityParams,
}

impl SimilarityGraphBuilder {
    pub fn new(params: SimilarityParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SimilarityParams {
        &self.params
    }

    /// Build the graph, evaluating each unordered pair once.
    ///
    /// # Panics
    ///
    /// Panics if `ids` and `profiles` differ in length or `ids` has duplicates.
    pub fn build<S, P>(&self, ids: &[S], profiles: &[P]) -> SimilarityGraph
    where
        S: AsRef<str>,
        P: AsRef<FrequencyMap>,
    {
        let mut graph = with_vertices(ids, profiles);
        let n = profiles.len();

        for i in 0..n {
            for j in (i + 1)..n {
                if is_similar(profiles[i].as_ref(), profiles[j].as_ref(), &self.params) {
                    graph.connect_indices(i, j);
                    debug!(
                        a = ids[i].as_ref(),
                        b = ids[j].as_ref(),
                        "Connected similar documents"
                    );
                }
            }
        }

        info!(
            documents = graph.vertex_count(),
            edges = graph.edge_count(),
            threshold = self.params.shared_word_threshold,
            min_word_len = self.params.min_word_len,
            "Built similarity graph"
        );
        graph
    }

    /// Build the graph by evaluating every ordered pair of distinct documents.
    ///
    /// Each (i, j) gets its own shared-word set, accumulated from scratch and
    /// dropped after the edge decision. Slower than [`build`](Self::build)
    /// but the result is the same.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`build`](Self::build).
    pub fn build_reference<S, P>(&self, ids: &[S], profiles: &[P]) -> SimilarityGraph
    where
        S: AsRef<str>,
        P: AsRef<FrequencyMap>,
    {
        let mut graph = with_vertices(ids, profiles);

        for (i, profile_a) in profiles.iter().enumerate() {
            for (j, profile_b) in profiles.iter().enumerate() {
                if i == j {
                    continue;
                }

                let shared = qualifying_shared_words(
                    profile_a.as_ref(),
                    profile_b.as_ref(),
                    self.params.min_word_len,
                );

                if shared.len() >= self.params.shared_word_threshold
                    && !graph.are_neighbors_by_index(i, j)
                {
                    graph.connect_indices(i, j);
                    debug!(
                        a = ids[i].as_ref(),
                        b = ids[j].as_ref(),
                        shared = shared.len(),
                        "Connected similar documents"
                    );
                }
            }
        }

        graph
    }
}

/// A graph holding exactly the given identifiers, in order, with no edges.
fn with_vertices<S: AsRef<str>, P>(ids: &[S], profiles: &[P]) -> SimilarityGraph {
    assert_eq!(
        ids.len(),
        profiles.len(),
        "every document identifier needs exactly one frequency profile"
    );

    let mut graph = SimilarityGraph::new();
    for id in ids {
        let id = id.as_ref();
        assert!(graph.add_vertex(id), "duplicate document identifier {id:?}");
    }
    graph
}
