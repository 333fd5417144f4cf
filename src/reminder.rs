use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, Utc};
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::mailer::Mailer;
use crate::repo;

/// Queries interviews due in the next 24 hours and emails each candidate
/// once. Best-effort: no dedup across runs, no delivery confirmation.
pub struct ReminderService {
    pool: SqlitePool,
    mailer: Arc<dyn Mailer>,
    // Taken with try_lock so a firing that overlaps a still-running
    // sweep skips instead of queueing behind it.
    run_guard: Mutex<()>,
}

impl ReminderService {
    pub fn new(pool: SqlitePool, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            pool,
            mailer,
            run_guard: Mutex::new(()),
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        self.run_at(Utc::now().naive_utc()).await
    }

    /// One reminder sweep over the interview window `[now, now + 24h)`.
    ///
    /// A database error aborts the sweep; a failed send is logged and the
    /// sweep continues with the next application. Applications with no
    /// matching user or a null interview date are skipped silently.
    pub async fn run_at(&self, now: NaiveDateTime) -> Result<(), AppError> {
        let _guard = match self.run_guard.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::warn!("previous reminder run still in progress, skipping this firing");
                return Ok(());
            }
        };

        let due = repo::interviews_within(&self.pool, now, now + Duration::hours(24)).await?;
        tracing::info!("reminder run started, {} interviews due in the next 24h", due.len());

        let mut sent = 0usize;
        for job in &due {
            let Some(interview_date) = job.interview_date else {
                tracing::debug!("application {} has no interview date, skipping", job.id);
                continue;
            };
            let Some(user) = repo::find_user(&self.pool, &job.user_id).await? else {
                tracing::debug!("application {} has no matching user, skipping", job.id);
                continue;
            };

            let date = interview_date.format("%Y-%m-%d %H:%M").to_string();
            let subject = format!("Reminder: Interview for {} at {}", job.position, job.company);
            let body = format!(
                "You have an interview scheduled!\n\nPosition: {}\nCompany: {}\nDate: {}\n\nAll the best!",
                job.position, job.company, date
            );

            match self.mailer.send(&user.email, &subject, &body).await {
                Ok(()) => {
                    tracing::info!(
                        "sent interview reminder to {} for {} @ {} ({})",
                        user.email,
                        job.position,
                        job.company,
                        date
                    );
                    sent += 1;
                }
                Err(e) => {
                    tracing::error!("failed to send reminder for application {}: {:?}", job.id, e);
                }
            }
        }

        tracing::info!("reminder run finished, {} reminders sent", sent);
        Ok(())
    }
}
