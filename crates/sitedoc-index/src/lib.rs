//! Index builders for static documentation sites.
//!
//! Two independent builders consume the same validated entity collection: the
//! tree builder turns classes, modules and files into a nested navigation
//! structure, and the search index builder flattens the same entities into a
//! record list the browser-side fuzzy matcher scans linearly. Both are pure,
//! deterministic, in-memory transformations; serialization to artifact files
//! happens downstream.

/// Serialized navigation node shapes.
pub mod node;
/// Flat search index construction.
pub mod search;
/// Navigation tree construction.
pub mod tree;

pub use node::{NodeKind, TreeNode};
pub use search::{SearchIndex, SearchIndexBuilder, SearchRecord};
pub use tree::TreeBuilder;
