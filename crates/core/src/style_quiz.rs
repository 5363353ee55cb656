//! Style quiz definition and the preferences blob it produces.
//!
//! The backend stores preferences as an opaque JSON string on the event.
//! The client only writes it (from quiz answers) and reads it back for
//! display; unknown keys are preserved.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One quiz step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub key: &'static str,
    pub question: &'static str,
    pub options: &'static [QuizOption],
}

impl QuizQuestion {
    pub fn option(&self, value: &str) -> Option<&'static QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        key: "style",
        question: "Which style best represents your dream wedding?",
        options: &[
            QuizOption {
                value: "traditional",
                label: "Classic & Traditional",
            },
            QuizOption {
                value: "modern",
                label: "Modern & Minimalist",
            },
        ],
    },
    QuizQuestion {
        key: "photography",
        question: "Which photo style do you prefer?",
        options: &[
            QuizOption {
                value: "candid",
                label: "Candid & Natural",
            },
            QuizOption {
                value: "posed",
                label: "Posed & Editorial",
            },
        ],
    },
    QuizQuestion {
        key: "priority",
        question: "What's more important for your reception?",
        options: &[
            QuizOption {
                value: "food",
                label: "Exquisite Food",
            },
            QuizOption {
                value: "music",
                label: "Unforgettable Music",
            },
        ],
    },
];

/// Look up a question by key.
pub fn question(key: &str) -> Option<&'static QuizQuestion> {
    QUIZ_QUESTIONS.iter().find(|q| q.key == key)
}

/// Quiz answers keyed by question key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StylePreferences(BTreeMap<String, String>);

impl StylePreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the opaque string stored on an event.
    ///
    /// Blank input yields `Ok(None)`; non-string values are kept as their
    /// JSON text so nothing the backend stored is dropped.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let obj = value.as_object().ok_or_else(|| {
            CoreError::Validation("Style preferences must be a JSON object".to_string())
        })?;
        let map = obj
            .iter()
            .map(|(k, v)| {
                let text = match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect::<BTreeMap<_, _>>();
        if map.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self(map)))
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(question, answer label)` rows for display, in quiz order, followed
    /// by any keys the quiz does not know about.
    pub fn summary(&self) -> Vec<(String, String)> {
        let known = QUIZ_QUESTIONS.iter().filter_map(|q| {
            self.get(q.key).map(|v| {
                let label = q.option(v).map_or(v, |o| o.label);
                (q.question.to_string(), label.to_string())
            })
        });
        let unknown = self
            .0
            .iter()
            .filter(|(k, _)| question(k).is_none())
            .map(|(k, v)| (k.clone(), v.clone()));
        known.chain(unknown).collect()
    }

    /// Encode as the opaque string the backend stores.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

/// DTO for `PUT /api/events/{id}/preferences`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferences {
    pub style_preferences: String,
}

impl UpdatePreferences {
    pub fn from_preferences(prefs: &StylePreferences) -> Result<Self, CoreError> {
        Ok(Self {
            style_preferences: prefs.to_json_string()?,
        })
    }
}
