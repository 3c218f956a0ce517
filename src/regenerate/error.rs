use thiserror::Error;

/// Reasons a regeneration attempt did not update the page.
///
/// The first three are input errors raised before any request is sent. The rest are raised
/// once a request was issued and leave the day's content untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegenerateError {
    #[error("the control has no day number")]
    MissingDayNumber,
    #[error("invalid day number {0:?}")]
    InvalidDayNumber(String),
    #[error("the page has no trip id")]
    MissingTripId,
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("response did not include any content")]
    EmptyContent,
    #[error("content element for day {0} not found")]
    MissingContentElement(i32),
}

impl RegenerateError {
    /// Input errors abort before a request is issued.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingDayNumber | Self::InvalidDayNumber(_) | Self::MissingTripId
        )
    }
}
