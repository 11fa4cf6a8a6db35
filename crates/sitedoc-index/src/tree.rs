use std::collections::{BTreeMap, HashSet};

use sitedoc_model::{Entity, EntityCollection, EntityKind};
use tracing::debug;

use crate::node::TreeNode;

/// Builds the combined navigation tree from a validated entity collection.
///
/// The output is a forest: a single synthetic "files" group first (only when
/// the collection holds more than one file), followed by the class/module
/// roots. Emission is deterministic, prunes entities without documented
/// content, and visits every entity at most once even when the extractor's
/// containment relation aliases an entity under several parents.
pub struct TreeBuilder<'a> {
	collection: &'a EntityCollection,
}

impl<'a> TreeBuilder<'a> {
	/// Create a builder over `collection`.
	pub fn new(collection: &'a EntityCollection) -> Self {
		Self { collection }
	}

	/// Build the combined navigation tree.
	pub fn build(&self) -> Vec<TreeNode> {
		debug!(entities = self.collection.len(), "building navigation tree");
		let mut nodes = Vec::new();
		if let Some(files) = self.file_tree() {
			nodes.push(files);
		}
		nodes.extend(self.class_tree());
		nodes
	}

	/// Build the class/module forest.
	///
	/// Roots are entities whose parent is absent or not itself a class or
	/// module. One visited set is shared across the entire recursion; the
	/// independent file tree never sees it.
	pub fn class_tree(&self) -> Vec<TreeNode> {
		let roots: Vec<&Entity> = self
			.collection
			.classes_and_modules()
			.filter(|entity| self.collection.is_top_level(entity))
			.collect();
		let mut visited = HashSet::new();
		self.class_level(roots, &mut visited)
	}

	fn class_level(
		&self,
		candidates: Vec<&'a Entity>,
		visited: &mut HashSet<&'a str>,
	) -> Vec<TreeNode> {
		let mut keep: Vec<&Entity> = candidates
			.into_iter()
			.filter(|entity| {
				!visited.contains(entity.full_name.as_str())
					&& self.collection.has_documented_content(entity)
			})
			.collect();
		keep.sort_by(|a, b| a.name.cmp(&b.name));

		let mut level = Vec::new();
		for entity in keep {
			// An earlier sibling's subtree may have claimed this entity
			// since the filter above ran; first sorted parent wins.
			if !visited.insert(entity.full_name.as_str()) {
				continue;
			}
			let children =
				self.class_level(self.collection.nested_classes_and_modules(entity), visited);
			// Only directly documented entities get a page of their own;
			// an entity kept for its descendants is just a folder.
			let path = if entity.has_documentation {
				entity.path.clone()
			} else {
				String::new()
			};
			level.push(TreeNode::entry(
				entity.name.clone(),
				path,
				inheritance_suffix(entity),
				children,
			));
		}
		level
	}

	/// Build the synthetic directory tree over file entities.
	///
	/// Returns `None` for single-file collections: one file needs no folder.
	pub fn file_tree(&self) -> Option<TreeNode> {
		let files: Vec<&Entity> = self.collection.files().collect();
		if files.len() < 2 {
			return None;
		}
		debug!(files = files.len(), "building file tree");
		let mut trie = PathTrie::default();
		for file in files {
			trie.insert(&file.full_name, &file.path);
		}
		Some(TreeNode::group("files", trie.into_nodes()))
	}
}

fn inheritance_suffix(entity: &Entity) -> String {
	match (entity.kind, &entity.superclass_name) {
		(EntityKind::Class, Some(superclass)) => format!(" < {superclass}"),
		_ => String::new(),
	}
}

/// Path-segment trie over file paths.
///
/// `BTreeMap` keys the segments, so sibling directories and files come out in
/// lexical order without a separate sort pass.
#[derive(Debug, Default)]
struct PathTrie {
	children: BTreeMap<String, PathTrie>,
	url: Option<String>,
}

impl PathTrie {
	fn insert(&mut self, relative_path: &str, url: &str) {
		let mut node = self;
		for segment in relative_path.split('/').filter(|s| !s.is_empty()) {
			node = node.children.entry(segment.to_string()).or_default();
		}
		node.url = Some(url.to_string());
	}

	fn into_nodes(self) -> Vec<TreeNode> {
		self.children
			.into_iter()
			.map(|(segment, child)| {
				if child.children.is_empty() {
					TreeNode::entry(segment, child.url.unwrap_or_default(), "", Vec::new())
				} else {
					TreeNode::group(segment, child.into_nodes())
				}
			})
			.collect()
	}
}
