//! pathmap - flat path lists rendered as visual project trees.
//!
//! Reads one slash-delimited relative path per line from an input file,
//! merges shared prefixes into a single hierarchy, and writes a
//! box-drawing tree listing to an output file.
//!
//! # Architecture
//!
//! ```text
//! Loader → Tree Builder → Renderer → output file
//!   ↓           ↓             ↓
//! BOM-aware   BTreeMap     box-drawing
//! line split   merge        connectors
//! ```
//!
//! The whole pipeline is synchronous and single-threaded; the tree lives
//! only in memory for the duration of a run. Rendering is deterministic:
//! siblings always appear in ascending lexicographic order regardless of
//! input order.

pub mod config;
pub mod loader;
pub mod rendering;
pub mod tree;
pub mod types;

// Re-export the pipeline surface
pub use config::Config;
pub use loader::load_path_list;
pub use rendering::TreeRenderer;
pub use tree::build_tree;
pub use types::Node;
