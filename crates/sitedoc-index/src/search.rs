use serde::Serialize;
use sitedoc_model::{Entity, EntityCollection, EntityKind};
use tracing::debug;

/// One searchable record in the client-side index.
///
/// Methods are deliberately not nested under their owner: the browser-side
/// matcher scans a single linear candidate list on every keystroke, so the
/// index is flattened to match that access pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchRecord {
	/// A documented class.
	#[serde(rename_all = "camelCase")]
	Class {
		/// Fully qualified class name.
		full_name: String,
		/// Output path of the class page.
		path: String,
	},
	/// A documented module.
	#[serde(rename_all = "camelCase")]
	Module {
		/// Fully qualified module name.
		full_name: String,
		/// Output path of the module page.
		path: String,
	},
	/// A documented method.
	#[serde(rename_all = "camelCase")]
	Method {
		/// Fully qualified name of the owning class or module.
		owning_full_name: String,
		/// Method name as declared.
		method_name: String,
		/// One-line summary; may be empty.
		summary: String,
		/// Anchor URL of the method on its owner's page.
		anchor_url: String,
	},
}

/// The flat search index plus its match-acceleration structure.
///
/// `terms` holds one lowercase match key per record, positionally aligned:
/// the client matcher scans `terms[i]` and dereferences `records[i]` on a
/// hit. Record order is the insertion order of the build traversal; ranking
/// happens client-side, so the index is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
	/// Searchable records in traversal order.
	pub records: Vec<SearchRecord>,
	/// Lowercase match key per record.
	pub terms: Vec<String>,
}

impl SearchIndex {
	/// Number of records in the index.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether the index holds no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	fn push(&mut self, record: SearchRecord, term: String) {
		self.records.push(record);
		self.terms.push(term);
	}
}

/// Flattens a validated entity collection into a [`SearchIndex`].
pub struct SearchIndexBuilder<'a> {
	collection: &'a EntityCollection,
}

impl<'a> SearchIndexBuilder<'a> {
	/// Create a builder over `collection`.
	pub fn new(collection: &'a EntityCollection) -> Self {
		Self { collection }
	}

	/// Build the search index.
	///
	/// Classes and modules are traversed as a sorted collection (by fully
	/// qualified name); each entity contributes its own record followed by
	/// one record per documented method, in declaration order. Entities
	/// without documented content are skipped silently — search only
	/// surfaces documented entities.
	pub fn build(&self) -> SearchIndex {
		let mut owners: Vec<&Entity> = self.collection.classes_and_modules().collect();
		owners.sort_by(|a, b| a.full_name.cmp(&b.full_name));

		let mut index = SearchIndex::default();
		for entity in owners {
			if !entity.has_documentation {
				continue;
			}
			index.push(owner_record(entity), entity.full_name.to_lowercase());
			for method in &entity.documented_methods {
				index.push(
					SearchRecord::Method {
						owning_full_name: entity.full_name.clone(),
						method_name: method.name.clone(),
						summary: method.summary.clone(),
						anchor_url: method.anchor_url.clone(),
					},
					method.name.to_lowercase(),
				);
			}
		}
		debug!(records = index.len(), "built search index");
		index
	}
}

fn owner_record(entity: &Entity) -> SearchRecord {
	match entity.kind {
		EntityKind::Module => SearchRecord::Module {
			full_name: entity.full_name.clone(),
			path: entity.path.clone(),
		},
		_ => SearchRecord::Class {
			full_name: entity.full_name.clone(),
			path: entity.path.clone(),
		},
	}
}
