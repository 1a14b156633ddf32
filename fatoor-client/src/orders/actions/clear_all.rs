//! ClearAll action
//!
//! Resets the whole ledger for the next group order: empty line list, fee
//! back to zero, lock released. Runs regardless of lock state and is the
//! sole way to unlock.

use shared::models::RestaurantOrder;

/// ClearAll action
#[derive(Debug, Clone)]
pub struct ClearAll;

impl ClearAll {
    pub fn apply(&self, order: &RestaurantOrder) -> RestaurantOrder {
        RestaurantOrder::empty(order.restaurant_id.clone())
    }
}
