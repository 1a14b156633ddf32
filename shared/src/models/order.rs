//! Order Model
//!
//! One `RestaurantOrder` document exists per restaurant, keyed by
//! restaurant id. The whole document is replaced on every write
//! (last-write-wins), so the struct is the unit of persistence.

use serde::{Deserialize, Serialize};

use super::MenuItem;

/// One (user, menu item) record within a restaurant's group order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: String,
    /// Denormalized copy of the menu item at time of add
    pub menu_item: MenuItem,
    /// Always >= 1; a line that would reach 0 is deleted instead
    pub quantity: i32,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub notes: String,
}

impl OrderLine {
    /// Line food total in the smallest currency unit
    pub fn line_total(&self) -> i64 {
        self.menu_item.price * self.quantity as i64
    }
}

/// The shared order ledger for one restaurant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantOrder {
    pub restaurant_id: String,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub delivery_fee: i64,
    #[serde(default)]
    pub is_locked: bool,
}

impl RestaurantOrder {
    /// Empty ledger: no lines, zero fee, unlocked
    pub fn empty(restaurant_id: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            items: Vec::new(),
            delivery_fee: 0,
            is_locked: false,
        }
    }

    /// Find this user's line for an item, if any
    pub fn find_line(&self, user_id: &str, item_id: &str) -> Option<&OrderLine> {
        self.items
            .iter()
            .find(|l| l.user_id == user_id && l.item_id == item_id)
    }
}
