/// Rejected graph configuration.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
	#[error("option `{field}` must be positive, got {value}")]
	NonPositive { field: &'static str, value: f64 },

	#[error("option `{field}` must be a finite number")]
	NonFinite { field: &'static str },

	#[error("invalid graph options JSON: {0}")]
	Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OptionsError>;
