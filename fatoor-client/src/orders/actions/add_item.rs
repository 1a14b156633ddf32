//! AddItem action
//!
//! Adds one unit of a menu item to the active user's order. Repeated adds
//! of the same item by the same user increment the existing line instead
//! of creating a duplicate.

use shared::models::{MenuItem, OrderLine, RestaurantOrder};

use super::super::error::LedgerError;

/// AddItem action
#[derive(Debug, Clone)]
pub struct AddItem {
    pub item: MenuItem,
    pub user_id: String,
    pub user_name: String,
}

impl AddItem {
    pub fn apply(&self, order: &RestaurantOrder) -> Result<RestaurantOrder, LedgerError> {
        if order.is_locked {
            return Err(LedgerError::Locked);
        }
        if self.user_id.is_empty() {
            return Err(LedgerError::MissingUser);
        }

        let mut next = order.clone();

        // At most one line per (user, item): increment in place, preserving
        // the line's position; new lines go last.
        if let Some(line) = next
            .items
            .iter_mut()
            .find(|l| l.user_id == self.user_id && l.item_id == self.item.id)
        {
            line.quantity += 1;
        } else {
            next.items.push(OrderLine {
                item_id: self.item.id.clone(),
                menu_item: self.item.clone(),
                quantity: 1,
                user_id: self.user_id.clone(),
                user_name: self.user_name.clone(),
                notes: String::new(),
            });
        }

        Ok(next)
    }
}
