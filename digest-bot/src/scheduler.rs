//! Daily digest scheduling: computes the next 09:00 UTC tick and drives
//! [`ScheduledDigestJob::run`] in a background task.

use chrono::{DateTime, Duration, Utc};
use news_digest::ScheduledDigestJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Hour of day (UTC) the daily digest goes out.
pub const DIGEST_HOUR_UTC: u32 = 9;

/// Next scheduled run strictly after `now`: today at 09:00 UTC, or tomorrow once that has
/// passed. Per-subscriber timezones are reserved but unimplemented; everyone gets UTC.
pub fn next_run_after(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now
        .date_naive()
        .and_hms_opt(DIGEST_HOUR_UTC, 0, 0)
        .expect("valid wall-clock time")
        .and_utc();
    if now < today {
        today
    } else {
        today + Duration::days(1)
    }
}

/// Spawns the scheduler loop: sleep until the next 09:00 UTC, run the fan-out, repeat.
pub fn spawn_daily_digest(job: Arc<ScheduledDigestJob>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = Utc::now();
            let next = next_run_after(now);
            let wait = (next - now).to_std().unwrap_or_default();
            info!(next_run = %next, "daily digest scheduled");
            tokio::time::sleep(wait).await;
            job.run().await;
        }
    })
}
