//! Polls and vote tallies.
//!
//! Votes are counted server-side; the helpers here only derive display
//! values (totals, percentages, which option the current user picked).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EntityId;
use crate::validation::require_non_empty;

/// Minimum number of options a poll can be created with.
pub const MIN_POLL_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: EntityId,
    pub option_text: String,
    pub vote_count: u32,
    #[serde(default)]
    pub voters: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: EntityId,
    pub title: String,
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub has_voted: bool,
}

impl Poll {
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|o| o.vote_count).sum()
    }

    /// Share of votes for `option`, rounded to a whole percent.
    pub fn percentage(&self, option: &PollOption) -> u32 {
        let total = self.total_votes();
        if total == 0 {
            return 0;
        }
        ((option.vote_count as f64 / total as f64) * 100.0).round() as u32
    }

    /// The option the given user voted for, if any.
    pub fn my_vote(&self, user_id: &str) -> Option<&PollOption> {
        self.options
            .iter()
            .find(|o| o.voters.iter().any(|v| v == user_id))
    }

    pub fn option(&self, option_id: &str) -> Result<&PollOption, CoreError> {
        self.options
            .iter()
            .find(|o| o.id == option_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "PollOption",
                id: option_id.to_string(),
            })
    }
}

/// Letter label for the option at `index` (`A`, `B`, ...).
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// DTO for `POST /api/polls`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPoll {
    pub event_id: EntityId,
    pub title: String,
    pub options: Vec<String>,
}

impl NewPoll {
    pub fn new(event_id: &str, title: &str, options: &[String]) -> Result<Self, CoreError> {
        let title = require_non_empty(title, "Poll question")?;
        if options.len() < MIN_POLL_OPTIONS {
            return Err(CoreError::Validation(format!(
                "A poll needs at least {MIN_POLL_OPTIONS} options."
            )));
        }
        let options = options
            .iter()
            .map(|o| require_non_empty(o, "Every option"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            event_id: event_id.to_string(),
            title,
            options,
        })
    }
}

/// DTO for `POST /api/polls/{id}/vote`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVote {
    pub option_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll() -> Poll {
        serde_json::from_value(serde_json::json!({
            "id": "p1",
            "title": "Cake flavour?",
            "options": [
                { "id": "o1", "optionText": "Chocolate", "voteCount": 3, "voters": ["u1", "u2", "u3"] },
                { "id": "o2", "optionText": "Vanilla", "voteCount": 1, "voters": ["u4"] },
                { "id": "o3", "optionText": "Lemon", "voteCount": 0 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn tallies() {
        let p = poll();
        assert_eq!(p.total_votes(), 4);
        assert_eq!(p.percentage(&p.options[0]), 75);
        assert_eq!(p.percentage(&p.options[2]), 0);
        assert!(!p.has_voted);
    }

    #[test]
    fn my_vote_lookup() {
        let p = poll();
        assert_eq!(p.my_vote("u4").map(|o| o.id.as_str()), Some("o2"));
        assert!(p.my_vote("u9").is_none());
        assert!(p.option("o3").is_ok());
        assert!(matches!(p.option("zz"), Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn empty_poll_percentage_is_zero() {
        let mut p = poll();
        p.options.iter_mut().for_each(|o| o.vote_count = 0);
        assert_eq!(p.percentage(&p.options[0]), 0);
    }

    #[test]
    fn labels() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(2), 'C');
    }

    #[test]
    fn new_poll_validation() {
        let two = vec!["Yes".to_string(), "No".to_string()];
        let p = NewPoll::new("e1", "Outdoor?", &two).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["eventId"], "e1");
        assert_eq!(json["options"], serde_json::json!(["Yes", "No"]));

        assert!(NewPoll::new("e1", "", &two).is_err());
        assert!(NewPoll::new("e1", "Q", &["Only".to_string()]).is_err());
        assert!(NewPoll::new("e1", "Q", &["A".to_string(), " ".to_string()]).is_err());
    }
}
