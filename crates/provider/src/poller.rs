//! Bounded polling for transaction outcomes.

use crate::{Ledger, PollError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use torque_primitives::{Receipt, TxId};

/// One block period; the default wait between polling attempts.
pub const BLOCK_INTERVAL: Duration = Duration::from_secs(10);

/// Default retry budget used when waiting for a receipt.
pub const DEFAULT_POLL_ATTEMPTS: u32 = 12;

/// Polling parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PollerConfig {
    /// Maximum number of receipt queries before giving up.
    pub attempts: u32,
    /// Wait between consecutive queries; block production cadence is
    /// variable, so this is a hint, approximately one block period.
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { attempts: DEFAULT_POLL_ATTEMPTS, interval: BLOCK_INTERVAL }
    }
}

/// Resolves a submitted transaction id into its finalized [`Receipt`].
///
/// Inclusion is asynchronous and cannot be confirmed at submission time, so
/// the poller repeatedly queries the ledger until the receipt becomes
/// observable or the retry budget is exhausted. It always terminates within
/// `attempts` queries: the first present receipt wins, and `attempts`
/// consecutive absences end in [`PollError::Timeout`].
///
/// An included-but-reverted transaction is a successful poll; callers
/// branch on [`Receipt::reverted`] themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomePoller {
    config: PollerConfig,
}

impl OutcomePoller {
    /// Poller with an explicit budget and interval.
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self { config: PollerConfig { attempts, interval } }
    }

    /// Poller using the given configuration.
    pub fn with_config(config: PollerConfig) -> Self {
        Self { config }
    }

    /// The configured parameters.
    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Polls `ledger` until the receipt for `tx_id` is observable.
    ///
    /// Suspends for [`PollerConfig::interval`] between attempts; there is
    /// no sleep after the final attempt.
    pub async fn await_outcome<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        tx_id: TxId,
    ) -> Result<Receipt, PollError> {
        let PollerConfig { attempts, interval } = self.config;
        for attempt in 1..=attempts {
            if let Some(receipt) = ledger.receipt(tx_id).await? {
                debug!(%tx_id, attempt, reverted = receipt.reverted, "receipt observed");
                return Ok(receipt);
            }
            trace!(%tx_id, attempt, attempts, "receipt not yet observable");
            if attempt < attempts {
                sleep(interval).await;
            }
        }
        warn!(%tx_id, attempts, "retry budget exhausted");
        Err(PollError::Timeout { tx_id, attempts })
    }
}

impl From<PollerConfig> for OutcomePoller {
    fn from(config: PollerConfig) -> Self {
        Self::with_config(config)
    }
}
