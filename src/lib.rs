// textgraph: word-frequency profiles and shared-vocabulary similarity graphs
//
// This is the library root. Each module corresponds to one stage of the
// pipeline or the glue around it.

pub mod config;
pub mod graph;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod text;
