use thiserror::Error;

/// Errors raised while building the humanizer or its tables.
///
/// The request path itself never surfaces these to callers: a failing
/// tokenizer degrades to returning the input unchanged.
#[derive(Error, Debug)]
pub enum HumanizeError {
	#[error("Tokenizer unavailable: {0}")]
	TokenizerUnavailable(String),

	#[error("Invalid rule pattern: {pattern} - {reason}")]
	InvalidPattern { pattern: String, reason: String },

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type HumanizeResult<T> = Result<T, HumanizeError>;
