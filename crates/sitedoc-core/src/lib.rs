//! Core library for sitedoc, building the navigation and search artifacts of a
//! static documentation site.
//!
//! This crate provides the high-level `Sitedoc` API which runs both index
//! builders over an extractor-supplied entity collection and writes the
//! resulting artifacts. It is UI-agnostic: HTML templating and page rendering
//! live with the embedding generator, which only consumes the artifacts
//! produced here.

/// Artifact text rendering and terminal writes.
pub mod emit;
/// Error helpers for the core API.
pub mod error;

use std::fs;
use std::path::Path;

pub use sitedoc_index::{
	NodeKind, SearchIndex, SearchIndexBuilder, SearchRecord, TreeBuilder, TreeNode,
};
pub use sitedoc_model::{Entity, EntityCollection, EntityKind, MethodDoc, ModelError};
use tracing::info;

pub use crate::error::{Result, SitedocError};

/// In-memory build products, complete before any I/O happens.
#[derive(Debug, Clone)]
pub struct Artifacts {
	/// The combined navigation tree.
	pub tree: Vec<TreeNode>,
	/// The flat search index.
	pub search_index: SearchIndex,
}

/// Counts reported after a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
	/// Top-level entries in the navigation tree.
	pub tree_entries: usize,
	/// Records in the search index.
	pub search_records: usize,
}

/// Sitedoc builds the browsable-navigation and client-search artifacts of a
/// static documentation site from one resolved entity collection.
///
/// Generation is synchronous and batch-oriented: both structures are built
/// fully in memory, then each artifact is written with a single terminal
/// write. A run either completes or aborts on the first error with no partial
/// output.
#[derive(Debug, Clone)]
pub struct Sitedoc {
	/// Global variable name assigned in the tree artifact.
	tree_variable: String,

	/// File name of the tree artifact.
	tree_file: String,

	/// File name of the search index artifact.
	index_file: String,

	/// Whether to pretty-print artifact JSON.
	pretty: bool,
}

impl Default for Sitedoc {
	fn default() -> Self {
		Self::new()
	}
}

impl Sitedoc {
	/// Creates a new Sitedoc instance with default configuration: compact
	/// JSON, `navigationTree` as the global variable, `tree.js` and
	/// `search_index.js` as artifact names.
	pub fn new() -> Self {
		Self {
			tree_variable: "navigationTree".to_string(),
			tree_file: "tree.js".to_string(),
			index_file: "search_index.js".to_string(),
			pretty: false,
		}
	}

	/// Sets the global variable name assigned in the tree artifact.
	pub fn with_tree_variable(mut self, name: &str) -> Self {
		self.tree_variable = name.to_string();
		self
	}

	/// Sets the file name of the tree artifact.
	pub fn with_tree_file(mut self, name: &str) -> Self {
		self.tree_file = name.to_string();
		self
	}

	/// Sets the file name of the search index artifact.
	pub fn with_index_file(mut self, name: &str) -> Self {
		self.index_file = name.to_string();
		self
	}

	/// Enables or disables pretty-printed artifact JSON.
	pub fn with_pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	/// Build both artifacts in memory without touching the filesystem.
	///
	/// The two builders run independently over the same collection; each
	/// top-level tree build owns its own visited state.
	pub fn build(&self, collection: &EntityCollection) -> Artifacts {
		let tree = TreeBuilder::new(collection).build();
		let search_index = SearchIndexBuilder::new(collection).build();
		Artifacts { tree, search_index }
	}

	/// Build both artifacts and write them under `out_dir`.
	///
	/// All I/O happens after both structures are fully built: one write per
	/// artifact, nothing else.
	pub fn generate(&self, collection: &EntityCollection, out_dir: &Path) -> Result<BuildSummary> {
		let artifacts = self.build(collection);
		let tree_source = emit::tree_source(&artifacts.tree, &self.tree_variable, self.pretty)?;
		let index_source = emit::search_index_source(&artifacts.search_index, self.pretty)?;

		let tree_path = out_dir.join(&self.tree_file);
		fs::write(&tree_path, &tree_source)?;
		info!(
			path = %tree_path.display(),
			bytes = tree_source.len(),
			"wrote navigation tree"
		);

		let index_path = out_dir.join(&self.index_file);
		fs::write(&index_path, &index_source)?;
		info!(
			path = %index_path.display(),
			bytes = index_source.len(),
			"wrote search index"
		);

		Ok(BuildSummary {
			tree_entries: artifacts.tree.len(),
			search_records: artifacts.search_index.len(),
		})
	}
}
