//! Output rendering - from the merged hierarchy to connector-prefixed text.
//!
//! One mode: a depth-first tree listing with UTF-8 box-drawing connectors,
//! byte-deterministic for a given hierarchy.

mod tree;

pub use tree::TreeRenderer;
