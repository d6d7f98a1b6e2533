use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
	#[error("invalid base url for {service}: {reason}")]
	InvalidBaseUrl { service: &'static str, reason: String },
	#[error("no output filename given")]
	MissingFilename,
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	#[error(transparent)]
	Io(#[from] std::io::Error),
	#[error(transparent)]
	Prompt(#[from] dialoguer::Error),
}

impl SmokeError {
	/// Whether the failure belongs to a single call and the run can move on.
	pub fn is_call_failure(&self) -> bool {
		matches!(self, SmokeError::Transport(_) | SmokeError::Json(_))
	}
}

pub type SmokeResult<T> = Result<T, SmokeError>;
