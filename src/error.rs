use thiserror::Error;

/// Message shown to the golfer whenever a trajectory could not be fetched.
pub const TRAJECTORY_FAILED_MESSAGE: &str = "Failed to calculate trajectory. Please try again.";

/// Errors arising from shot setup, recommendation, and trajectory fetching.
#[derive(Debug, Error)]
pub enum CaddieError {
    #[error("unknown club key {key:?}")]
    UnknownClub { key: String },

    #[error("club {label:?} is not on the club ladder")]
    NotOnLadder { label: String },

    #[error("unknown scenario id {id}")]
    UnknownScenario { id: usize },

    #[error("target carry must be a positive number of yards (got {carry})")]
    InvalidCarry { carry: f64 },

    #[error("condition {field} must be a finite number (got {value})")]
    InvalidCondition { field: &'static str, value: f64 },

    /// Transport, status, or decode failure. Display is deliberately opaque;
    /// the cause is available through `source()` for logs.
    #[error("{}", TRAJECTORY_FAILED_MESSAGE)]
    TrajectoryFailed(#[source] FetchError),
}

/// Underlying cause of a [`CaddieError::TrajectoryFailed`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("trajectory service returned HTTP {status}{}", format_body_suffix(body))]
    Status {
        status: u16,
        /// Leading bytes of the response body for debug context.
        body: String,
    },

    #[error("malformed trajectory response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CaddieError {
    /// True for input problems the golfer can fix (as opposed to service failures).
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::TrajectoryFailed(_))
    }
}

impl From<FetchError> for CaddieError {
    fn from(e: FetchError) -> Self {
        Self::TrajectoryFailed(e)
    }
}

/// Format a body excerpt like " | Internal Server Error" (empty if no body).
fn format_body_suffix(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    let limit = 120;
    let excerpt: String = body.chars().take(limit).collect();
    let ellipsis = if body.chars().count() > limit { "..." } else { "" };
    format!(" | {excerpt}{ellipsis}")
}

pub type Result<T> = std::result::Result<T, CaddieError>;
