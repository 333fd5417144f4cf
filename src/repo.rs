use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::job_application::{JobApplication, STATUS_INTERVIEW};
use crate::models::user::User;

/// Applications in status "Interview" whose interview falls in the
/// half-open window `[from, to)`.
pub async fn interviews_within(
    pool: &SqlitePool,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<Vec<JobApplication>, AppError> {
    let jobs = sqlx::query_as::<_, JobApplication>(
        "SELECT * FROM job_applications \
         WHERE status = ? AND interview_date >= ? AND interview_date < ?",
    )
    .bind(STATUS_INTERVIEW)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(jobs)
}

/// Exact-match lookup by primary key; zero or one row.
pub async fn find_user(pool: &SqlitePool, id: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}
