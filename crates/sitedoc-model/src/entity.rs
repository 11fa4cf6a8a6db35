use serde::{Deserialize, Serialize};

/// The kind of documentable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	/// A class, rendered with an optional inheritance suffix.
	Class,
	/// A module; modules never carry an inheritance suffix.
	Module,
	/// A source file, grouped into the synthetic directory tree.
	File,
}

impl EntityKind {
	/// Short identifier used in serialized search records.
	pub fn as_str(&self) -> &'static str {
		match self {
			EntityKind::Class => "class",
			EntityKind::Module => "module",
			EntityKind::File => "file",
		}
	}

	/// Whether this kind participates in the class/module forest.
	pub fn is_class_or_module(&self) -> bool {
		matches!(self, EntityKind::Class | EntityKind::Module)
	}
}

/// A documented method of a class or module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDoc {
	/// Method name as declared.
	pub name: String,
	/// One-line summary; may be empty.
	pub summary: String,
	/// Anchor URL of the method on its owner's page.
	pub anchor_url: String,
}

/// A documentable entity as delivered by the external extractor.
///
/// Entities reference each other by `full_name` key rather than by pointer:
/// the extractor's `parent`/`children` relation is an open-ended graph, and an
/// entity may be reachable through more than one parent.
///
/// For `File` entities, `full_name` is the file's relative source path (the
/// path split into the directory trie) and `name` its final segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
	/// Simple identifier, e.g. `Inner`.
	pub name: String,
	/// Fully qualified path, e.g. `Outer::Inner`. Unique across the collection.
	pub full_name: String,
	/// Entity kind.
	pub kind: EntityKind,
	/// `full_name` of the enclosing entity, if any.
	pub parent: Option<String>,
	/// `full_name`s of contained entities, in declared order.
	pub children: Vec<String>,
	/// Whether the entity itself has documented content. Transitive
	/// qualification is never read from this flag; builders recompute it by
	/// walking descendants.
	pub has_documentation: bool,
	/// Relative output path if the entity renders its own page, empty otherwise.
	pub path: String,
	/// Display text for the superclass, if one is declared.
	pub superclass_name: Option<String>,
	/// Documented methods in declaration order.
	pub documented_methods: Vec<MethodDoc>,
}

impl Entity {
	/// Whether this entity participates in the class/module forest.
	pub fn is_class_or_module(&self) -> bool {
		self.kind.is_class_or_module()
	}
}
