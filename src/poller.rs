//! Polling loop for homework review statuses

use std::time::Duration;

use chrono::Utc;
use compact_str::CompactString;
use serde_json::Value;
use tokio::{sync::broadcast, time::sleep};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    client::PracticumApi,
    domain::{HomeworkRecord, NO_ACTIVE_WORK, Verdict},
    notifier::Notifier,
    response::check_response,
    result::{HwbotError, Result},
};

/// Delay between polling cycles, applied regardless of cycle outcome.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Mutable state carried across polling cycles.
///
/// Never persisted; an empty state on startup means the first observed
/// status is always reported.
#[derive(Debug, Default)]
struct LoopState {
    last_status: Option<Verdict>,
    last_message: Option<CompactString>,
}

/// Polls the review API and notifies on status changes
pub struct StatusPoller<N> {
    api: PracticumApi,
    notifier: N,
    interval: Duration,
    state: LoopState,
    shutdown_tx: broadcast::Sender<()>,
}

impl<N: Notifier> StatusPoller<N> {
    pub fn new(api: PracticumApi, notifier: N, interval: Duration) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            api,
            notifier,
            interval,
            state: LoopState::default(),
            shutdown_tx,
        }
    }

    /// Get a shutdown sender for external shutdown control
    pub fn shutdown_sender(&self) -> broadcast::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Run the polling loop until a shutdown signal arrives.
    ///
    /// Every cycle ends with the full retry delay, success or failure, so a
    /// persistent upstream failure cannot turn into a tight retry loop. The
    /// delay itself is interruptible by the shutdown signal.
    #[instrument(skip(self), fields(interval = ?self.interval))]
    pub async fn start(mut self) {
        info!("starting status poller");
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        loop {
            if let Err(e) = self.run_cycle().await {
                log_cycle_error(&e);
            }

            tokio::select! {
                _ = sleep(self.interval) => {}
                _ = shutdown_rx.recv() => {
                    info!("shutting down status poller");
                    break;
                }
            }
        }
    }

    /// One fetch → validate → decide → notify pass
    async fn run_cycle(&mut self) -> Result<()> {
        let from_date = Utc::now().timestamp();
        info!(from_date, "polling homework statuses");

        let payload = self.api.fetch_statuses(from_date).await?;
        let homeworks = check_response(&payload)?;
        let candidate = self.decide(homeworks)?;
        self.deliver(candidate).await
    }

    /// Choose the candidate message for this cycle and track the last
    /// observed status. Only the first entry of the sequence is considered.
    fn decide(&mut self, homeworks: &[Value]) -> Result<CompactString> {
        let Some(first) = homeworks.first() else {
            // Nothing under review; status tracking is left untouched.
            return Ok(NO_ACTIVE_WORK.into());
        };

        let record = HomeworkRecord::from_value(first)?;
        if self.state.last_status != Some(record.status) {
            debug!(message = %record.full_message(), "homework status changed");
            self.state.last_status = Some(record.status);
        }

        // Steady-state notifications carry the bare verdict sentence, not
        // the name-enriched one.
        Ok(record.status.text().into())
    }

    /// Send the candidate unless it matches the last delivered message.
    async fn deliver(&mut self, candidate: CompactString) -> Result<()> {
        if self.state.last_message.as_ref() == Some(&candidate) {
            debug!("candidate message already delivered, skipping");
            return Ok(());
        }

        // last_message only advances on success, so a failed send is
        // retried with the same candidate next cycle.
        self.notifier.send(&candidate).await?;
        debug!(message = %candidate, "notification sent");
        self.state.last_message = Some(candidate);
        Ok(())
    }
}

fn log_cycle_error(error: &HwbotError) {
    match error {
        HwbotError::Shape(e) => warn!(error = %e, "malformed homework statuses payload"),
        HwbotError::Record(e) => warn!(error = %e, "unusable homework record"),
        HwbotError::Client(e) => error!(error = %e, "failed to fetch homework statuses"),
        HwbotError::Notify(e) => error!(error = %e, "failed to deliver notification"),
    }
}
