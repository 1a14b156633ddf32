//! LockOrder action
//!
//! One-way finalization: "we called the restaurant, stop editing". There
//! is no unlock action; the only way back is [`super::ClearAll`], which
//! resets the ledger for the next group order.

use shared::models::RestaurantOrder;

/// LockOrder action
#[derive(Debug, Clone)]
pub struct LockOrder;

impl LockOrder {
    /// Idempotent.
    pub fn apply(&self, order: &RestaurantOrder) -> RestaurantOrder {
        let mut next = order.clone();
        next.is_locked = true;
        next
    }
}
