use serde::{Deserialize, Serialize};

/// Registered account. Created by the registration flow; this service
/// only ever reads it to resolve the recipient of a reminder.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
}
