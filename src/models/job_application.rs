use serde::{Deserialize, Serialize};

/// One tracked job application. Written by the application-management
/// flows; read-only here. `status` is free-form, the only value this
/// service recognizes is `"Interview"`.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobApplication {
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub position: String,
    pub status: String,
    pub applied_date: chrono::NaiveDateTime,
    pub interview_date: Option<chrono::NaiveDateTime>,
    pub notes: Option<String>,
}

pub const STATUS_INTERVIEW: &str = "Interview";
