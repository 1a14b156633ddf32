//! Ballot transitions

use shared::models::{Poll, User, VoteOption};
use shared::util;

use super::error::PollError;

/// Toggle a user's vote on one option.
///
/// Semantics:
/// 1. If the user currently votes for some option, that vote is removed.
/// 2. If that option *is* `option_id`, stop: net effect is an un-vote.
/// 3. Otherwise the user is added to `option_id`'s voter set.
///
/// An `option_id` that matches no option still runs step 1: the user's
/// previous vote comes off and has nowhere to land, so they end up not
/// voting at all. `votes` on every option is recomputed from the voter
/// set; the stored counter is never trusted.
pub fn toggle_vote(poll: &Poll, option_id: &str, user_id: &str) -> Poll {
    let mut next = poll.clone();

    let previous = next
        .options
        .iter()
        .position(|o| o.has_voter(user_id));

    let toggled_off = match previous {
        Some(idx) => {
            next.options[idx].voter_ids.retain(|id| id != user_id);
            next.options[idx].id == option_id
        }
        None => false,
    };

    if !toggled_off
        && let Some(option) = next.options.iter_mut().find(|o| o.id == option_id)
    {
        option.voter_ids.push(user_id.to_string());
    }

    for option in &mut next.options {
        option.votes = option.voter_ids.len() as i64;
    }

    next
}

/// Rounded percentage of one option against a vote total
pub fn percentage(option_votes: i64, total_votes: i64) -> i64 {
    if total_votes == 0 {
        return 0;
    }
    (option_votes as f64 / total_votes as f64 * 100.0).round() as i64
}

/// Presentation order: most recent poll first
pub fn sort_newest_first(polls: &mut [Poll]) {
    polls.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// CreatePoll payload
#[derive(Debug, Clone)]
pub struct CreatePoll {
    pub question: String,
    /// Raw option texts; blank entries are dropped before validation
    pub options: Vec<String>,
}

impl CreatePoll {
    /// Validate and build the poll document.
    ///
    /// Fails when the question is blank or fewer than 2 non-blank option
    /// texts remain. Every option starts with an empty voter set.
    pub fn build(self, creator: &User) -> Result<Poll, PollError> {
        if self.question.trim().is_empty() {
            return Err(PollError::EmptyQuestion);
        }

        let texts: Vec<&str> = self
            .options
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if texts.len() < 2 {
            return Err(PollError::NotEnoughOptions(texts.len()));
        }

        let now = util::now_millis();
        let options = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| VoteOption::new(text, format!("opt-{now}-{index}")))
            .collect();

        Ok(Poll {
            id: util::gen_id("poll"),
            creator_id: creator.id.clone(),
            creator_name: creator.name.clone(),
            question: self.question,
            options,
            is_active: true,
            created_at: now,
        })
    }
}
