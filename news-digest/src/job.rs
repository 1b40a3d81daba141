//! Scheduled fan-out: one digest per subscriber, with per-subscriber failure isolation.
//!
//! [`ScheduledDigestJob::run`] is the zero-argument entry point; an external scheduler
//! (the bot's timer task, cron, an orchestration job) invokes it at the configured time.

use crate::composer::DigestComposer;
use crate::registry::SubscriberStore;
use news_core::DigestDelivery;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Outcome counters for one fan-out cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanoutReport {
    pub attempted: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Daily digest job: composer + registry + delivery channel.
pub struct ScheduledDigestJob {
    composer: DigestComposer,
    store: Arc<dyn SubscriberStore>,
    delivery: Arc<dyn DigestDelivery>,
}

impl ScheduledDigestJob {
    pub fn new(
        composer: DigestComposer,
        store: Arc<dyn SubscriberStore>,
        delivery: Arc<dyn DigestDelivery>,
    ) -> Self {
        Self {
            composer,
            store,
            delivery,
        }
    }

    /// Runs one fan-out cycle over a snapshot of the registry.
    ///
    /// Each subscriber gets an independently composed, freshly timestamped digest. A failed
    /// compose still produces a (degraded) document; a failed send is logged and counted but
    /// never aborts delivery to the remaining subscribers. Scheduled failures are silent to
    /// end users — there is no synchronous requester to notify.
    #[instrument(skip(self))]
    pub async fn run(&self) -> FanoutReport {
        let subscribers = match self.store.list_all().await {
            Ok(subscribers) => subscribers,
            Err(e) => {
                error!(error = %e, "could not list subscribers, skipping digest cycle");
                return FanoutReport::default();
            }
        };

        info!(
            subscriber_count = subscribers.len(),
            "sending daily digest"
        );

        let mut report = FanoutReport::default();
        for subscriber in subscribers {
            report.attempted += 1;
            let text = self.composer.compose_morning_digest().await;
            match self.delivery.send_digest(subscriber.chat_id, &text).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    error!(
                        user_id = subscriber.user_id,
                        error = %e,
                        "failed to send digest to subscriber"
                    );
                }
            }
        }

        info!(
            delivered = report.delivered,
            failed = report.failed,
            "daily digest cycle finished"
        );
        report
    }
}
