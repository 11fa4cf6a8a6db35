use std::collections::{HashMap, HashSet};

use crate::entity::{Entity, EntityKind};
use crate::error::{ModelError, Result};

/// The full set of documentable entities for one generation run.
///
/// Entities are stored in insertion order and addressed through their
/// `full_name`, the stable join key for all containment edges. Construction
/// validates the extractor's preconditions, so every reference held by a
/// stored entity is known to resolve afterwards.
#[derive(Debug, Clone, Default)]
pub struct EntityCollection {
	entities: Vec<Entity>,
	by_full_name: HashMap<String, usize>,
}

impl EntityCollection {
	/// Validate and index an extractor-supplied entity list.
	///
	/// Rejects entities with empty `full_name`s, duplicate `full_name`s, and
	/// `parent`/`children` keys that name no entity. An empty list is valid
	/// and produces empty artifacts downstream.
	pub fn new(entities: Vec<Entity>) -> Result<Self> {
		let mut by_full_name = HashMap::with_capacity(entities.len());
		for (idx, entity) in entities.iter().enumerate() {
			if entity.full_name.is_empty() {
				return Err(ModelError::MissingFullName(entity.name.clone()));
			}
			if by_full_name.insert(entity.full_name.clone(), idx).is_some() {
				return Err(ModelError::DuplicateFullName(entity.full_name.clone()));
			}
		}

		for entity in &entities {
			let references = entity.parent.iter().chain(entity.children.iter());
			for key in references {
				if !by_full_name.contains_key(key) {
					return Err(ModelError::UnresolvedReference {
						from: entity.full_name.clone(),
						to: key.clone(),
					});
				}
			}
		}

		Ok(Self {
			entities,
			by_full_name,
		})
	}

	/// Number of entities in the collection.
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	/// Whether the collection holds no entities.
	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	/// Look up an entity by its fully qualified name.
	pub fn get(&self, full_name: &str) -> Option<&Entity> {
		self.by_full_name
			.get(full_name)
			.map(|&idx| &self.entities[idx])
	}

	/// All entities in insertion order.
	pub fn entities(&self) -> &[Entity] {
		&self.entities
	}

	/// All class and module entities, in insertion order.
	pub fn classes_and_modules(&self) -> impl Iterator<Item = &Entity> {
		self.entities.iter().filter(|e| e.is_class_or_module())
	}

	/// All file entities, in insertion order.
	pub fn files(&self) -> impl Iterator<Item = &Entity> {
		self.entities
			.iter()
			.filter(|e| e.kind == EntityKind::File)
	}

	/// Class/module entities declared as children of `entity`, in declared order.
	pub fn nested_classes_and_modules(&self, entity: &Entity) -> Vec<&Entity> {
		entity
			.children
			.iter()
			.filter_map(|key| self.get(key))
			.filter(|child| child.is_class_or_module())
			.collect()
	}

	/// Whether `entity` sits at the top of the class/module forest.
	///
	/// Top-level means the parent is absent or is not itself a class/module
	/// (an entity declared at file scope is a root).
	pub fn is_top_level(&self, entity: &Entity) -> bool {
		match entity.parent.as_deref().and_then(|key| self.get(key)) {
			Some(parent) => !parent.is_class_or_module(),
			None => true,
		}
	}

	/// Whether `entity` has documented content, directly or in any descendant.
	///
	/// This is the pruning predicate for the navigation tree. It is a
	/// depth-first walk rather than a read of the `has_documentation` flag,
	/// and it carries a seen set so cyclic containment terminates.
	pub fn has_documented_content(&self, entity: &Entity) -> bool {
		let mut seen = HashSet::new();
		self.documented_under(entity, &mut seen)
	}

	fn documented_under<'a>(&'a self, entity: &'a Entity, seen: &mut HashSet<&'a str>) -> bool {
		if !seen.insert(entity.full_name.as_str()) {
			return false;
		}
		if entity.has_documentation {
			return true;
		}
		self.nested_classes_and_modules(entity)
			.into_iter()
			.any(|child| self.documented_under(child, seen))
	}
}
