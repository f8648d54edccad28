use std::time::Duration;
use vise::{Buckets, Counter, Gauge, Histogram, Metrics};

/// Polling engine metrics.
#[derive(Debug, Metrics)]
#[metrics(prefix = "proof_oracle")]
pub struct ProofOracleMetrics {
    /// Proofs accepted by the downstream store.
    pub proofs_delivered: Counter,
    /// Ticks that found the batch not yet committed below the ceiling.
    pub proofs_not_yet_available: Counter,
    /// Proof lookups that failed with an RPC or data fault.
    pub lookup_errors: Counter,
    /// Deliveries the downstream store did not acknowledge.
    pub delivery_errors: Counter,

    /// Next L2 transaction index awaiting a proof.
    pub next_index: Gauge<u64>,
    /// Most recent L1 height ceiling used for lookups.
    pub proof_ceiling: Gauge<u64>,

    /// Wall time of one proof lookup.
    #[metrics(buckets = Buckets::LATENCIES)]
    pub lookup_latency: Histogram<Duration>,
}

#[vise::register]
pub(crate) static METRICS: vise::Global<ProofOracleMetrics> = vise::Global::new();
