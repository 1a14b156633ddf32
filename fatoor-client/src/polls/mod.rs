//! Poll ballot
//!
//! Single-choice, re-toggleable voting: each user holds at most one vote
//! per poll, clicking their current choice again un-votes, clicking a
//! different option moves the vote. Like the ledger, every transition is
//! pure and the caller persists the resulting whole poll document.

mod ballot;
mod error;

pub use ballot::{percentage, sort_newest_first, toggle_vote, CreatePoll};
pub use error::PollError;
