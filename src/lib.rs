// Graphite: stylometric authorship attribution
//
// This is the library root. Each module corresponds to a major stage of the
// attribution pipeline: text feature extraction, the per-corpus feature
// model, similarity scoring, and report output.

pub mod config;
pub mod corpus;
pub mod model;
pub mod output;
pub mod scoring;
pub mod text;
