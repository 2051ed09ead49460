use thiserror::Error;

/// Errors produced while turning a schedule page into lessons.
#[derive(Debug, Error)]
pub enum Error {
	#[cfg(feature = "fetch")]
	#[error("failed to fetch schedule page: {0}")]
	Fetch(#[from] reqwest::Error),

	#[error("{what} does not match the expected pattern: {text:?}")]
	PatternMismatch { what: &'static str, text: String },

	#[error(transparent)]
	Validation(#[from] ValidationError),
}

/// A rejected request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("invalid `day` parameter {0:?}: must be an integer from 0 to 7")]
	Day(String),

	#[error("invalid `{param}` parameter {value:?}: must be a 24-hour HHMM time (0000-2359)")]
	Time { param: &'static str, value: String },
}
