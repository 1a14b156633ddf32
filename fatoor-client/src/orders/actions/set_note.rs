//! SetNote action
//!
//! Overwrites the free-text note on one of a user's lines ("no onions",
//! "extra garlic"). Notes surface in the aggregated review list so the
//! person phoning the restaurant can read them out.

use shared::models::RestaurantOrder;

/// SetNote action
#[derive(Debug, Clone)]
pub struct SetNote {
    pub item_id: String,
    pub user_id: String,
    pub text: String,
}

impl SetNote {
    /// No-op when the order is locked or no matching line exists.
    pub fn apply(&self, order: &RestaurantOrder) -> RestaurantOrder {
        if order.is_locked {
            return order.clone();
        }

        let mut next = order.clone();
        if let Some(line) = next
            .items
            .iter_mut()
            .find(|l| l.user_id == self.user_id && l.item_id == self.item_id)
        {
            line.notes = self.text.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{empty_order, line, menu_item};
    use super::*;

    #[test]
    fn set_note_overwrites_existing_text() {
        let mut order = empty_order();
        let mut l = line(menu_item("m-1", "Shawarma", 400), "u-1", "Sami", 1);
        l.notes = "extra garlic".into();
        order.items.push(l);

        let next = SetNote {
            item_id: "m-1".into(),
            user_id: "u-1".into(),
            text: "no pickles".into(),
        }
        .apply(&order);

        assert_eq!(next.items[0].notes, "no pickles");
    }

    #[test]
    fn set_note_on_missing_line_is_a_no_op() {
        let order = empty_order();
        let next = SetNote {
            item_id: "m-1".into(),
            user_id: "u-1".into(),
            text: "no pickles".into(),
        }
        .apply(&order);

        assert_eq!(next, order);
    }

    #[test]
    fn set_note_on_locked_order_is_a_no_op() {
        let mut order = empty_order();
        order.items.push(line(menu_item("m-1", "Shawarma", 400), "u-1", "Sami", 1));
        order.is_locked = true;

        let next = SetNote {
            item_id: "m-1".into(),
            user_id: "u-1".into(),
            text: "no pickles".into(),
        }
        .apply(&order);

        assert_eq!(next.items[0].notes, "");
    }

    #[test]
    fn clearing_a_note_sets_empty_string() {
        let mut order = empty_order();
        let mut l = line(menu_item("m-1", "Shawarma", 400), "u-1", "Sami", 1);
        l.notes = "extra garlic".into();
        order.items.push(l);

        let next = SetNote {
            item_id: "m-1".into(),
            user_id: "u-1".into(),
            text: String::new(),
        }
        .apply(&order);

        assert_eq!(next.items[0].notes, "");
    }
}
