use std::fmt;

/// Errors raised while validating an extractor-supplied entity collection.
///
/// All of these are precondition violations: the run is aborted before any
/// artifact work starts, and nothing is written.
#[derive(Debug)]
pub enum ModelError {
	/// An entity arrived without a fully qualified name.
	MissingFullName(String),
	/// Two entities share the same fully qualified name.
	DuplicateFullName(String),
	/// A `parent` or `children` key names no entity in the collection.
	UnresolvedReference {
		/// Entity holding the dangling reference.
		from: String,
		/// The key that failed to resolve.
		to: String,
	},
}

impl fmt::Display for ModelError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingFullName(name) => {
				write!(f, "entity '{name}' has no fully qualified name")
			}
			Self::DuplicateFullName(full_name) => {
				write!(f, "duplicate fully qualified name: {full_name}")
			}
			Self::UnresolvedReference { from, to } => {
				write!(f, "entity '{from}' references unknown entity '{to}'")
			}
		}
	}
}

impl std::error::Error for ModelError {}

/// Result type returned by model validation.
pub type Result<T> = std::result::Result<T, ModelError>;
