use std::fmt;
use std::io::Error as IoError;

use serde_json::Error as SerdeError;
use sitedoc_model::ModelError;

/// Aggregate errors produced by the sitedoc-core API.
#[derive(Debug)]
pub enum SitedocError {
	/// The extractor-supplied entity collection violated a precondition.
	Model(ModelError),
	/// Failed to encode an artifact as JSON.
	Serialization(SerdeError),
	/// Failed to write an artifact file.
	Io(IoError),
}

impl fmt::Display for SitedocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Model(err) => write!(f, "{err}"),
			Self::Serialization(err) => write!(f, "{err}"),
			Self::Io(err) => write!(f, "{err}"),
		}
	}
}

impl std::error::Error for SitedocError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Model(err) => Some(err),
			Self::Serialization(err) => Some(err),
			Self::Io(err) => Some(err),
		}
	}
}

impl From<ModelError> for SitedocError {
	fn from(err: ModelError) -> Self {
		Self::Model(err)
	}
}

impl From<SerdeError> for SitedocError {
	fn from(err: SerdeError) -> Self {
		Self::Serialization(err)
	}
}

impl From<IoError> for SitedocError {
	fn from(err: IoError) -> Self {
		Self::Io(err)
	}
}

/// Result type returned by the sitedoc-core library.
pub type Result<T> = std::result::Result<T, SitedocError>;
