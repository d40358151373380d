//! The poll / validate / notify loop.

use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    domain::PollTimestamp,
    homework::{check_response, parse_status},
    notifier::Notifier,
    ports::HomeworkApi,
    Result,
};

/// Sent once when the loop starts.
pub const STARTUP_MESSAGE: &str = "Начали парсинг!";

pub struct Poller {
    api: Arc<dyn HomeworkApi>,
    notifier: Notifier,
    retry_period: Duration,
}

impl Poller {
    pub fn new(api: Arc<dyn HomeworkApi>, notifier: Notifier, retry_period: Duration) -> Self {
        Self {
            api,
            notifier,
            retry_period,
        }
    }

    /// Run cycles until `cancel` fires.
    ///
    /// `from_date` is captured once here and reused for every request.
    pub async fn run(&self, cancel: CancellationToken) {
        self.run_from(PollTimestamp::now(), cancel).await;
    }

    pub async fn run_from(&self, from_date: PollTimestamp, cancel: CancellationToken) {
        info!(%from_date, period = ?self.retry_period, "polling started");
        self.notifier.send_message(STARTUP_MESSAGE).await;

        // On failure the last message computed (or the startup one) is re-sent.
        let mut last_message = STARTUP_MESSAGE.to_string();

        loop {
            if let Err(e) = self.poll_once(from_date, &mut last_message).await {
                error!("program failure: {e}");
                self.notifier.send_message(&last_message).await;
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = sleep(self.retry_period) => {}
            }
        }

        info!("polling stopped");
    }

    /// One fetch → validate → parse → notify pass.
    ///
    /// Only the first (newest) record is reported. `last_message` is updated
    /// as soon as a record renders, before delivery is attempted.
    pub async fn poll_once(
        &self,
        from_date: PollTimestamp,
        last_message: &mut String,
    ) -> Result<()> {
        let response = self.api.get_api_answer(from_date).await?;
        let homeworks = check_response(&response)?;

        let Some(newest) = homeworks.first() else {
            debug!("no new homework statuses");
            return Ok(());
        };

        *last_message = parse_status(newest)?;
        self.notifier.send_message(last_message).await;
        Ok(())
    }
}
