use thiserror::Error;

/// Errors raised by [`EnumGenerator`](crate::EnumGenerator).
///
/// Catalog content never fails the pipeline; every name maps to an identifier
/// or drops its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
	/// Generation was requested before any catalog was loaded.
	#[error("no item catalog loaded")]
	NotLoaded,
}

pub type Result<T> = std::result::Result<T, GenerateError>;
