// Similarity graph — a simple undirected graph over document identifiers.
//
// Vertices keep their insertion order (the order documents were supplied).
// Edges are unweighted and unlabeled: at most one edge per pair, never a
// self-loop. Adjacency is stored per vertex index so neighbor checks are a
// set-membership test.

pub mod builder;
pub mod params;
pub mod similarity;

use std::collections::{BTreeSet, HashMap};

/// Undirected, simple graph keyed by document identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimilarityGraph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl SimilarityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Returns `false` (and changes nothing) if it already exists.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.vertices.len());
        self.vertices.push(id);
        self.adjacency.push(BTreeSet::new());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether an edge joins `a` and `b`. Unknown vertices are never neighbors.
    pub fn are_neighbors(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    /// Connect `a` and `b`. Returns `true` if a new edge was added; connecting
    /// a vertex to itself or re-connecting existing neighbors is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if either vertex has not been added.
    pub fn connect(&mut self, a: &str, b: &str) -> bool {
        let i = self.require(a);
        let j = self.require(b);
        self.connect_indices(i, j)
    }

    pub(crate) fn connect_indices(&mut self, i: usize, j: usize) -> bool {
        if i == j || self.adjacency[i].contains(&j) {
            return false;
        }
        self.adjacency[i].insert(j);
        self.adjacency[j].insert(i);
        true
    }

    pub(crate) fn are_neighbors_by_index(&self, i: usize, j: usize) -> bool {
        self.adjacency[i].contains(&j)
    }

    /// Neighbors of `id` in vertex insertion order. Empty for unknown vertices.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        match self.index.get(id) {
            Some(&i) => self.adjacency[i]
                .iter()
                .map(|&j| self.vertices[j].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn degree(&self, id: &str) -> usize {
        self.index
            .get(id)
            .map(|&i| self.adjacency[i].len())
            .unwrap_or(0)
    }

    /// Every edge exactly once as `(earlier, later)` in vertex order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &j in neighbors.range(i + 1..) {
                edges.push((self.vertices[i].as_str(), self.vertices[j].as_str()));
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Vertices with no neighbors, in insertion order.
    pub fn isolated(&self) -> Vec<&str> {
        self.vertices
            .iter()
            .zip(&self.adjacency)
            .filter(|(_, neighbors)| neighbors.is_empty())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    fn require(&self, id: &str) -> usize {
        match self.index.get(id) {
            Some(&i) => i,
            None => panic!("vertex {id:?} is not in the graph"),
        }
    }
}
