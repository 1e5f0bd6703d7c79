// Corpus pipeline: count every document, then build the similarity graph.
//
// Counting is independent per document. Graph building needs every profile,
// so it only starts once all documents have been counted successfully; a
// single unreadable document fails the whole run.

pub mod corpus;
pub mod document;
