//! RemoveItem action
//!
//! Removes one unit of an item from a user's order. At quantity 1 the line
//! is deleted entirely; the ledger never holds a zero-quantity line.

use shared::models::RestaurantOrder;

/// RemoveItem action
#[derive(Debug, Clone)]
pub struct RemoveItem {
    pub item_id: String,
    pub user_id: String,
}

impl RemoveItem {
    /// No-op (not an error) when the order is locked or no matching line
    /// exists; another client may have removed it first.
    pub fn apply(&self, order: &RestaurantOrder) -> RestaurantOrder {
        if order.is_locked {
            return order.clone();
        }

        let mut next = order.clone();
        if let Some(pos) = next
            .items
            .iter()
            .position(|l| l.user_id == self.user_id && l.item_id == self.item_id)
        {
            if next.items[pos].quantity > 1 {
                next.items[pos].quantity -= 1;
            } else {
                next.items.remove(pos);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{empty_order, line, menu_item};
    use super::*;

    fn remove(order: &RestaurantOrder, item_id: &str, user_id: &str) -> RestaurantOrder {
        RemoveItem {
            item_id: item_id.to_string(),
            user_id: user_id.to_string(),
        }
        .apply(order)
    }

    #[test]
    fn remove_decrements_quantity() {
        let mut order = empty_order();
        order.items.push(line(menu_item("m-1", "Burger", 500), "u-1", "Sami", 3));

        let next = remove(&order, "m-1", "u-1");
        assert_eq!(next.items[0].quantity, 2);
    }

    #[test]
    fn remove_at_quantity_one_deletes_line() {
        let mut order = empty_order();
        order.items.push(line(menu_item("m-1", "Burger", 500), "u-1", "Sami", 1));

        let next = remove(&order, "m-1", "u-1");
        assert!(next.items.is_empty());
    }

    #[test]
    fn remove_missing_line_is_a_no_op() {
        let mut order = empty_order();
        order.items.push(line(menu_item("m-1", "Burger", 500), "u-1", "Sami", 1));

        let next = remove(&order, "m-9", "u-1");
        assert_eq!(next, order);

        let next = remove(&order, "m-1", "u-9");
        assert_eq!(next, order);
    }

    #[test]
    fn remove_on_locked_order_leaves_state_unchanged() {
        let mut order = empty_order();
        order.items.push(line(menu_item("m-1", "Burger", 500), "u-1", "Sami", 2));
        order.is_locked = true;

        let next = remove(&order, "m-1", "u-1");
        assert_eq!(next, order);
    }

    #[test]
    fn remove_only_touches_the_matching_user() {
        let mut order = empty_order();
        order.items.push(line(menu_item("m-1", "Burger", 500), "u-1", "Sami", 1));
        order.items.push(line(menu_item("m-1", "Burger", 500), "u-2", "Lina", 1));

        let next = remove(&order, "m-1", "u-1");
        assert_eq!(next.items.len(), 1);
        assert_eq!(next.items[0].user_id, "u-2");
    }
}
