//! User Model

use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Employee,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create an employee with a generated id and placeholder avatar
    pub fn new_employee(name: impl Into<String>) -> Self {
        let id = crate::util::gen_id("u");
        let avatar = format!("https://picsum.photos/seed/{}/200", id);
        Self {
            id,
            name: name.into(),
            role: UserRole::Employee,
            avatar: Some(avatar),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
