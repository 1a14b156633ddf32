//! SetDeliveryFee action

use shared::models::RestaurantOrder;

/// SetDeliveryFee action
#[derive(Debug, Clone)]
pub struct SetDeliveryFee {
    pub fee: i64,
}

impl SetDeliveryFee {
    /// No-op when locked; negative input coerces to 0, matching the
    /// legacy client's `parseInt(..) || 0` handling of bad fee input.
    pub fn apply(&self, order: &RestaurantOrder) -> RestaurantOrder {
        if order.is_locked {
            return order.clone();
        }

        let mut next = order.clone();
        next.delivery_fee = self.fee.max(0);
        next
    }
}
