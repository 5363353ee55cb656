use mywedding_client::ApiError;
use mywedding_core::error::CoreError;

/// Message shown when an action needs a signed-in user and there is none.
pub const NOT_SIGNED_IN_MESSAGE: &str = "You must be logged in.";

/// Errors surfaced by sections, forms and flows.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist or is not visible to the user.
    #[error("{0}")]
    NotFound(String),

    #[error("You must be logged in.")]
    NotSignedIn,

    /// A submission from the same control is still in flight.
    #[error("Please wait for the current request to finish.")]
    Busy,

    /// Token acquisition failed in the identity provider.
    #[error("Could not obtain an access token: {0}")]
    Token(String),

    #[error(transparent)]
    Core(CoreError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<CoreError> for PlannerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => PlannerError::Validation(msg),
            other => PlannerError::Core(other),
        }
    }
}

impl PlannerError {
    /// Text for the inline error banner of the section or form that failed.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Validation(msg) | PlannerError::NotFound(msg) => msg.clone(),
            PlannerError::NotSignedIn => NOT_SIGNED_IN_MESSAGE.to_string(),
            PlannerError::Token(_) => NOT_SIGNED_IN_MESSAGE.to_string(),
            PlannerError::Busy => self.to_string(),
            PlannerError::Core(e) => e.user_message(),
            PlannerError::Api(e) => e.user_message(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PlannerError::Api(ApiError::Cancelled))
    }
}
