use thiserror::Error;

/// Errors raised by the geometry transforms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
	/// An argument was outside the domain of the operation, e.g. an empty point set.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

impl GeometryError {
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		GeometryError::InvalidArgument(message.into())
	}
}
