//! Data model for the sitedoc index builders.
//!
//! The types here describe the documentable entities handed over by an external
//! extractor: classes, modules and files, fully resolved before either index
//! builder runs. The model is deliberately graph-shaped rather than tree-shaped,
//! because the containment relation supplied by the extractor is not guaranteed
//! to be a strict tree.

/// Validated entity collection and containment queries.
pub mod collection;
/// Entity record types supplied by the extractor.
pub mod entity;
/// Domain-specific errors for model validation.
pub mod error;

pub use collection::EntityCollection;
pub use entity::{Entity, EntityKind, MethodDoc};
pub use error::{ModelError, Result};
