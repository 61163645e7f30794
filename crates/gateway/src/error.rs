use thiserror::Error;

/// Failure of an address lookup.
///
/// The form handles every variant the same way; the distinction is kept for logs.
#[derive(Debug, Error)]
pub enum LookupError {
	#[error("postal code not found")]
	NotFound,
	#[error("invalid postal code: {0:?}")]
	InvalidCode(String),
	#[error("lookup service returned HTTP {0}")]
	Status(u16),
	#[error("lookup transport error: {0}")]
	Transport(String),
	#[error("malformed lookup response: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("lookup task failed: {0}")]
	Task(String),
}

/// Failure of the location source, other than a denied permission.
#[derive(Debug, Error)]
pub enum LocationError {
	#[error("location unavailable: {0}")]
	Unavailable(String),
	#[error("location task failed: {0}")]
	Task(String),
}
