//! Wedding event entity and DTOs.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{lenient, Date, EntityId};
use crate::validation::require_non_empty;

/// An event as returned by `GET /api/events` and `GET /api/events/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub event_name: String,
    #[serde(deserialize_with = "lenient::date")]
    pub event_date: Date,
    #[serde(default)]
    pub total_budget: Option<f64>,
    /// Opaque JSON string written by the style quiz.
    #[serde(default)]
    pub style_preferences: Option<String>,
}

impl Event {
    /// Human-readable date used on dashboard cards, e.g. `January 1, 2026`.
    pub fn date_label(&self) -> String {
        self.event_date.format("%B %-d, %Y").to_string()
    }

    /// Whether the onboarding budget step has been completed for this event.
    pub fn has_budget(&self) -> bool {
        self.total_budget.is_some_and(|b| b > 0.0)
    }
}

/// DTO for `POST /api/events`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub event_name: String,
    pub event_date: Date,
}

impl CreateEvent {
    /// Build a create request from raw form input.
    ///
    /// The name must be non-empty and the date must parse as `YYYY-MM-DD`.
    pub fn from_form(event_name: &str, event_date: &str) -> Result<Self, CoreError> {
        let event_name = require_non_empty(event_name, "Event name")?;
        let event_date = parse_form_date(event_date, "Event date")?;
        Ok(Self {
            event_name,
            event_date,
        })
    }
}

/// Response body of `POST /api/events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    #[serde(alias = "id")]
    pub event_id: EntityId,
}

/// Parse a `YYYY-MM-DD` date typed into a form field.
pub fn parse_form_date(raw: &str, field: &str) -> Result<Date, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required.")));
    }
    Date::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("{field} must be a valid date (YYYY-MM-DD).")))
}
