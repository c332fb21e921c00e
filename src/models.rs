use serde::{Deserialize, Serialize};

/// A row of the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Body of a create or update request.
///
/// Every field is optional on the wire: missing `name` or `phone` is passed
/// through as NULL and rejected by the table's NOT NULL constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactPayload {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            phone: Some(phone.into()),
            email,
        }
    }
}
