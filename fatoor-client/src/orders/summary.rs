//! Ledger aggregations
//!
//! Read-side views over the flat line list: the per-user side panel, the
//! per-item review list for phoning the restaurant, the delivery split and
//! the grand total. Everything is recomputed from the current lines on
//! every call; nothing is cached, so the views can never drift from the
//! document the store last echoed.

use shared::models::{OrderLine, RestaurantOrder};

/// One user's slice of the group order
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub user_id: String,
    pub name: String,
    pub lines: Vec<OrderLine>,
    /// Sum of price x quantity over this user's lines, before delivery
    pub food_total: i64,
}

/// One distinct menu item aggregated across all users
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSummary {
    pub item_id: String,
    pub name: String,
    /// Total quantity across all users
    pub count: i64,
    /// Unit price from the denormalized snapshot of the first line seen
    pub price: i64,
    /// `"{user_name}: {notes}"` for every line with a non-empty note
    pub notes: Vec<String>,
}

/// Aggregation view over one restaurant's ledger
#[derive(Debug, Clone, Copy)]
pub struct OrderSummary<'a> {
    order: &'a RestaurantOrder,
}

impl<'a> OrderSummary<'a> {
    pub fn new(order: &'a RestaurantOrder) -> Self {
        Self { order }
    }

    /// Group lines by user, in order of each user's first appearance.
    pub fn by_user(&self) -> Vec<UserSummary> {
        let mut groups: Vec<UserSummary> = Vec::new();
        for line in &self.order.items {
            let group = match groups.iter_mut().find(|g| g.user_id == line.user_id) {
                Some(g) => g,
                None => {
                    groups.push(UserSummary {
                        user_id: line.user_id.clone(),
                        name: line.user_name.clone(),
                        lines: Vec::new(),
                        food_total: 0,
                    });
                    groups.last_mut().expect("just pushed")
                }
            };
            group.food_total += line.line_total();
            group.lines.push(line.clone());
        }
        groups
    }

    /// Group lines by item, in order of each item's first appearance.
    pub fn by_item(&self) -> Vec<ItemSummary> {
        let mut groups: Vec<ItemSummary> = Vec::new();
        for line in &self.order.items {
            let group = match groups.iter_mut().find(|g| g.item_id == line.item_id) {
                Some(g) => g,
                None => {
                    groups.push(ItemSummary {
                        item_id: line.item_id.clone(),
                        name: line.menu_item.name.clone(),
                        count: 0,
                        price: line.menu_item.price,
                        notes: Vec::new(),
                    });
                    groups.last_mut().expect("just pushed")
                }
            };
            group.count += line.quantity as i64;
            if !line.notes.is_empty() {
                group.notes.push(format!("{}: {}", line.user_name, line.notes));
            }
        }
        groups
    }

    /// Number of distinct users holding at least one line
    pub fn distinct_user_count(&self) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        for line in &self.order.items {
            if !seen.contains(&line.user_id.as_str()) {
                seen.push(&line.user_id);
            }
        }
        seen.len()
    }

    /// Delivery fee split evenly over users with lines; 0 when nobody
    /// ordered. Presentation value only, the stored fee is never mutated.
    pub fn delivery_split(&self) -> f64 {
        let users = self.distinct_user_count();
        if users == 0 {
            return 0.0;
        }
        self.order.delivery_fee as f64 / users as f64
    }

    /// What one user pays: their food total plus their delivery share
    pub fn user_total(&self, user: &UserSummary) -> f64 {
        user.food_total as f64 + self.delivery_split()
    }

    /// Food total across all lines plus the full delivery fee
    pub fn grand_total(&self) -> i64 {
        let food: i64 = self.order.items.iter().map(OrderLine::line_total).sum();
        food + self.order.delivery_fee
    }
}

#[cfg(test)]
mod tests {
    use super::super::actions::test_support::{empty_order, line, menu_item};
    use super::super::actions::{AddItem, RemoveItem, SetDeliveryFee, SetNote};
    use super::*;
    use shared::models::{MenuItem, RestaurantOrder};

    fn add(order: &RestaurantOrder, item: MenuItem, user: &str, name: &str) -> RestaurantOrder {
        AddItem {
            item,
            user_id: user.to_string(),
            user_name: name.to_string(),
        }
        .apply(order)
        .unwrap()
    }

    /// The worked scenario: burger x2 for one user, fries for another,
    /// fee 4 split two ways.
    fn scenario() -> RestaurantOrder {
        let order = add(&empty_order(), menu_item("m-1", "Burger", 5), "u-1", "Sami");
        let order = add(&order, menu_item("m-1", "Burger", 5), "u-1", "Sami");
        let order = add(&order, menu_item("m-2", "Fries", 2), "u-2", "Lina");
        SetDeliveryFee { fee: 4 }.apply(&order)
    }

    #[test]
    fn scenario_by_item() {
        let order = scenario();
        let items = OrderSummary::new(&order).by_item();

        assert_eq!(items.len(), 2);
        assert_eq!((items[0].name.as_str(), items[0].count, items[0].price), ("Burger", 2, 5));
        assert_eq!((items[1].name.as_str(), items[1].count, items[1].price), ("Fries", 1, 2));
    }

    #[test]
    fn scenario_per_user_totals_and_grand_total() {
        let order = scenario();
        let summary = OrderSummary::new(&order);

        assert_eq!(summary.delivery_split(), 2.0);

        let users = summary.by_user();
        assert_eq!(users[0].food_total, 10);
        assert_eq!(summary.user_total(&users[0]), 12.0);
        assert_eq!(users[1].food_total, 2);
        assert_eq!(summary.user_total(&users[1]), 4.0);

        assert_eq!(summary.grand_total(), 16);
    }

    #[test]
    fn both_aggregation_paths_agree_on_food_total() {
        let order = scenario();
        let summary = OrderSummary::new(&order);

        let by_user: i64 = summary.by_user().iter().map(|u| u.food_total).sum();
        let by_item: i64 = summary.by_item().iter().map(|i| i.price * i.count).sum();

        assert_eq!(by_user, by_item);
        assert_eq!(summary.grand_total(), by_item + order.delivery_fee);
    }

    #[test]
    fn delivery_split_is_zero_with_no_lines() {
        let order = SetDeliveryFee { fee: 500 }.apply(&empty_order());
        let summary = OrderSummary::new(&order);

        assert_eq!(summary.delivery_split(), 0.0);
        // The stored fee still counts toward the grand total even if nobody
        // ordered yet; that is what the document says.
        assert_eq!(summary.grand_total(), 500);
    }

    #[test]
    fn delivery_split_uses_real_division() {
        let order = add(&empty_order(), menu_item("m-1", "Burger", 5), "u-1", "Sami");
        let order = add(&order, menu_item("m-1", "Burger", 5), "u-2", "Lina");
        let order = add(&order, menu_item("m-2", "Fries", 2), "u-3", "Omar");
        let order = SetDeliveryFee { fee: 10 }.apply(&order);

        let split = OrderSummary::new(&order).delivery_split();
        assert!((split - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn notes_concatenate_user_name_and_text() {
        let order = add(&empty_order(), menu_item("m-1", "Shawarma", 400), "u-1", "Sami");
        let order = add(&order, menu_item("m-1", "Shawarma", 400), "u-2", "Lina");
        let order = SetNote {
            item_id: "m-1".into(),
            user_id: "u-2".into(),
            text: "no pickles".into(),
        }
        .apply(&order);

        let items = OrderSummary::new(&order).by_item();
        assert_eq!(items[0].notes, vec!["Lina: no pickles".to_string()]);
    }

    #[test]
    fn removed_line_disappears_from_both_views() {
        let mut order = empty_order();
        order.items.push(line(menu_item("m-1", "Burger", 500), "u-1", "Sami", 1));
        let order = RemoveItem {
            item_id: "m-1".into(),
            user_id: "u-1".into(),
        }
        .apply(&order);

        let summary = OrderSummary::new(&order);
        assert!(summary.by_user().is_empty());
        assert!(summary.by_item().is_empty());
        assert_eq!(summary.distinct_user_count(), 0);
    }

    #[test]
    fn by_user_orders_groups_by_first_appearance() {
        let order = add(&empty_order(), menu_item("m-2", "Fries", 2), "u-2", "Lina");
        let order = add(&order, menu_item("m-1", "Burger", 5), "u-1", "Sami");
        let order = add(&order, menu_item("m-1", "Burger", 5), "u-2", "Lina");

        let users = OrderSummary::new(&order).by_user();
        assert_eq!(users[0].name, "Lina");
        assert_eq!(users[0].lines.len(), 2);
        assert_eq!(users[1].name, "Sami");
    }
}
