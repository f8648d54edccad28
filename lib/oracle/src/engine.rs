use crate::metrics::METRICS;
use crate::sink::ProofSink;
use proof_oracle_proof_source::{ProofFetchError, ProofSource, TransactionBatchProof};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// The polling engine. Owns the index cursor; nothing else touches it.
///
/// Indices are processed strictly in increasing order, one at a time. The
/// cursor advances only once the proof for it was accepted downstream, so a
/// failed tick retries the same index after the next pacing sleep, and it
/// never decreases.
pub struct PollingOracle<S, K> {
    source: S,
    sink: K,
    polling_interval: Duration,
    safety_lag: u64,
    next_index: u64,
}

impl<S: ProofSource, K: ProofSink> PollingOracle<S, K> {
    /// Captures the starting cursor from the current L2 height.
    pub async fn initialize(
        source: S,
        sink: K,
        polling_interval: Duration,
        safety_lag: u64,
    ) -> anyhow::Result<Self> {
        let l2_height = source.l2_height().await?;
        let next_index = l2_height.saturating_sub(1);
        tracing::info!(l2_height, next_index, "initialized polling cursor");
        Ok(Self {
            source,
            sink,
            polling_interval,
            safety_lag,
            next_index,
        })
    }

    /// Runs until `cancel` fires, completing at most the in-flight tick
    /// afterwards. Per-tick failures are swallowed, counted and retried at
    /// the same cursor position on the next tick.
    pub async fn run(mut self, cancel: CancellationToken) -> anyhow::Result<()> {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("shutdown requested, stopping polling loop");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.polling_interval) => {}
            }
            self.tick().await;
        }
    }

    async fn tick(&mut self) {
        METRICS.next_index.set(self.next_index);

        let Some(ceiling) = self.proof_ceiling().await else {
            return;
        };

        tracing::info!(
            l2_tx_index = self.next_index,
            ceiling,
            "looking for transaction batch proof"
        );

        let lookup_latency = METRICS.lookup_latency.start();
        let lookup = self.source.batch_proof(self.next_index, ceiling).await;
        lookup_latency.observe();

        match lookup {
            Ok(payload) => {
                let proof = TransactionBatchProof {
                    index: self.next_index,
                    proof: payload,
                };
                self.deliver(proof).await;
            }
            Err(ProofFetchError::NotYetAvailable(index)) => {
                METRICS.proofs_not_yet_available.inc();
                tracing::debug!(l2_tx_index = index, "batch not committed below the ceiling yet");
            }
            Err(ProofFetchError::Lookup(err)) => {
                METRICS.lookup_errors.inc();
                tracing::warn!(
                    l2_tx_index = self.next_index,
                    %err,
                    "proof lookup failed, will retry"
                );
            }
        }
    }

    /// Latest L1 height minus the safety lag, refreshed on every tick so the
    /// effective lag stays constant as L1 advances. `None` skips the tick.
    async fn proof_ceiling(&self) -> Option<u64> {
        let l1_height = match self.source.l1_height().await {
            Ok(height) => height,
            Err(err) => {
                METRICS.lookup_errors.inc();
                tracing::warn!(%err, "failed to read L1 height, skipping tick");
                return None;
            }
        };
        match l1_height.checked_sub(self.safety_lag) {
            Some(ceiling) => {
                METRICS.proof_ceiling.set(ceiling);
                Some(ceiling)
            }
            None => {
                tracing::debug!(
                    l1_height,
                    safety_lag = self.safety_lag,
                    "L1 head is still inside the safety lag"
                );
                None
            }
        }
    }

    async fn deliver(&mut self, proof: TransactionBatchProof) {
        let index = proof.index;
        match self.sink.deliver(&proof).await {
            Ok(()) => {
                METRICS.proofs_delivered.inc();
                self.next_index += 1;
                tracing::info!(index, "delivered transaction batch proof");
            }
            Err(err) => {
                METRICS.delivery_errors.inc();
                tracing::warn!(index, %err, "proof delivery failed, will retry");
            }
        }
    }
}
