//! Poll Model

use serde::{Deserialize, Serialize};

/// One choice within a poll
///
/// `votes` is derived: it must always equal `voter_ids.len()`. It is kept
/// on the wire because the legacy client stored it, but every transition
/// recomputes it from the voter set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub voter_ids: Vec<String>,
}

impl VoteOption {
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            votes: 0,
            voter_ids: Vec::new(),
        }
    }

    /// Membership implies "this user's current vote is this option"
    pub fn has_voter(&self, user_id: &str) -> bool {
        self.voter_ids.iter().any(|id| id == user_id)
    }
}

/// Poll entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub creator_id: String,
    pub creator_name: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<VoteOption>,
    pub is_active: bool,
    /// Millis since epoch; used only for sort (most recent first)
    pub created_at: i64,
}

impl Poll {
    /// Total votes across all options
    pub fn total_votes(&self) -> i64 {
        self.options.iter().map(|o| o.voter_ids.len() as i64).sum()
    }

    /// The option id holding this user's current vote, if any
    pub fn voted_option_id(&self, user_id: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.has_voter(user_id))
            .map(|o| o.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_with_votes() -> Poll {
        Poll {
            id: "p-1".into(),
            creator_id: "u-1".into(),
            creator_name: "Sami".into(),
            question: "Where from?".into(),
            options: vec![
                VoteOption {
                    id: "opt-a".into(),
                    text: "Shamiyat".into(),
                    votes: 2,
                    voter_ids: vec!["u-1".into(), "u-2".into()],
                },
                VoteOption::new("Abu Kamal", "opt-b"),
            ],
            is_active: true,
            created_at: 1_756_500_000_000,
        }
    }

    #[test]
    fn total_votes_counts_voter_sets_not_counters() {
        let mut poll = poll_with_votes();
        // Drift the stored counter; the derived total must ignore it.
        poll.options[0].votes = 99;
        assert_eq!(poll.total_votes(), 2);
    }

    #[test]
    fn voted_option_id_finds_current_vote() {
        let poll = poll_with_votes();
        assert_eq!(poll.voted_option_id("u-2"), Some("opt-a"));
        assert_eq!(poll.voted_option_id("u-9"), None);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = serde_json::to_value(poll_with_votes()).unwrap();
        assert!(json.get("creatorName").is_some());
        assert!(json.get("isActive").is_some());
        assert!(json["options"][0].get("voterIds").is_some());
    }
}
