//! ClearUser action
//!
//! Drops every line belonging to one user. The ledger transition itself
//! ignores the lock flag: whether a locked order may still be cleared for
//! a single user is caller-side policy, enforced by the state container.

use shared::models::RestaurantOrder;

/// ClearUser action
#[derive(Debug, Clone)]
pub struct ClearUser {
    pub user_id: String,
}

impl ClearUser {
    pub fn apply(&self, order: &RestaurantOrder) -> RestaurantOrder {
        let mut next = order.clone();
        next.items.retain(|l| l.user_id != self.user_id);
        next
    }
}
