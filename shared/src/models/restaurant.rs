//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Immutable once referenced by an order line: edits from the admin panel
/// only affect future adds, existing lines keep their denormalized copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: i64, category: Option<String>) -> Self {
        Self {
            id: crate::util::gen_id("m"),
            name: name.into(),
            price: price.max(0),
            description: None,
            category,
        }
    }
}

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    /// Display-only flag; a closed restaurant can still receive orders
    pub is_open: bool,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            id: crate::util::gen_id("rest"),
            name: name.into(),
            image: image.into(),
            cuisine: cuisine.into(),
            menu: Vec::new(),
            is_open: true,
        }
    }
}
