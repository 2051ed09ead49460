use miette::Diagnostic;
use thiserror::Error;

/// Startup errors of the calendar server.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
	#[error("Environment error: {0}")]
	#[diagnostic(code(nagayo::environment))]
	Environment(String),

	#[error(transparent)]
	#[diagnostic(code(nagayo::schedule))]
	Schedule(#[from] nagayo_core::Error),

	#[error(transparent)]
	#[diagnostic(code(nagayo::io))]
	Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, Error>;

pub fn env_error(var: &str, reason: &str) -> Error {
	Error::Environment(format!("{var} {reason}"))
}
