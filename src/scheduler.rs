use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::reminder::ReminderService;

/// Daily at 07:00 (sec min hour day month weekday).
const DAILY_AT_SEVEN: &str = "0 0 7 * * *";

/// Arms the daily reminder trigger. The returned handle must be kept
/// alive for the lifetime of the process; dropping it stops the jobs.
///
/// The schedule is evaluated against the server's local clock, so the
/// trigger fires at 07:00 wall-clock time wherever the process runs.
///
/// Each firing is fire-and-forget: the trigger does not wait on the
/// sweep and a sweep failure is logged here, never propagated, so the
/// next firing is unaffected. Overlap between runs is handled inside
/// [`ReminderService`] itself.
pub async fn start(service: Arc<ReminderService>) -> Result<JobScheduler, AppError> {
    let sched = JobScheduler::new().await?;

    let job = Job::new_async_tz(DAILY_AT_SEVEN, chrono::Local, move |_id, _sched| {
        let service = service.clone();
        Box::pin(async move {
            if let Err(e) = service.run().await {
                tracing::error!("interview reminder run failed: {:?}", e);
            }
        })
    })?;

    sched.add(job).await?;
    sched.start().await?;

    Ok(sched)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, Timelike};

    use super::*;
    use crate::reminder::tests::{setup_pool, FakeMailer};

    #[tokio::test]
    async fn trigger_fires_at_seven_local_time() {
        let pool = setup_pool().await;
        let mailer = Arc::new(FakeMailer::default());
        let service = Arc::new(ReminderService::new(pool, mailer));

        let mut sched = start(service).await.unwrap();
        let till = sched.time_till_next_job().await.unwrap().unwrap();
        assert!(till <= std::time::Duration::from_secs(24 * 60 * 60));

        // The next tick lands on 07:00:00 local; `till` was measured a
        // moment before it, so allow the sub-second skew.
        let next = Local::now() + Duration::from_std(till).unwrap();
        assert!(
            (next.hour() == 7 && next.minute() == 0)
                || (next.hour() == 6 && next.minute() == 59),
            "next firing at {next}, expected 07:00 local"
        );

        sched.shutdown().await.unwrap();
    }
}
