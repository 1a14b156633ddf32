//! Ledger actions
//!
//! One action per file. Each action is a small struct whose `apply` takes
//! the current ledger by reference and returns the next full ledger value.
//! Actions never write anywhere themselves.

mod add_item;
mod clear_all;
mod clear_user;
mod lock_order;
mod remove_item;
mod set_delivery_fee;
mod set_note;

pub use add_item::AddItem;
pub use clear_all::ClearAll;
pub use clear_user::ClearUser;
pub use lock_order::LockOrder;
pub use remove_item::RemoveItem;
pub use set_delivery_fee::SetDeliveryFee;
pub use set_note::SetNote;

#[cfg(test)]
pub(crate) mod test_support {
    use shared::models::{MenuItem, OrderLine, RestaurantOrder};

    pub fn menu_item(id: &str, name: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: None,
            category: None,
        }
    }

    pub fn line(item: MenuItem, user_id: &str, user_name: &str, quantity: i32) -> OrderLine {
        OrderLine {
            item_id: item.id.clone(),
            menu_item: item,
            quantity,
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            notes: String::new(),
        }
    }

    pub fn empty_order() -> RestaurantOrder {
        RestaurantOrder::empty("rest-1")
    }
}
