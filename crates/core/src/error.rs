use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// The text shown inline next to a form.
    ///
    /// Validation messages are written for end users and are shown as-is;
    /// the other variants keep their prefixed `Display` form.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
