//! Read access to both chains for the polling engine: liveness-checked
//! connections, current heights, and the batch-inclusion proof lookup.

use async_trait::async_trait;

mod connect;
mod l1;
#[cfg(test)]
mod tests;
mod types;

pub use connect::{CONNECT_ATTEMPTS, CONNECT_RETRY_DELAY, ensure_connected};
pub use l1::RollupProofSource;
pub use types::{BatchHeader, ProofPayload, TransactionBatchProof};

/// Failure modes of a proof lookup.
///
/// `NotYetAvailable` is routine: the batch simply has not been committed at
/// or below the requested ceiling. Everything else is a `Lookup` fault.
#[derive(Debug, thiserror::Error)]
pub enum ProofFetchError {
    #[error("batch for L2 index {0} is not committed below the ceiling yet")]
    NotYetAvailable(u64),
    #[error(transparent)]
    Lookup(#[from] anyhow::Error),
}

/// What the polling engine sees of the two chains.
#[async_trait]
pub trait ProofSource: Send + Sync {
    /// Latest observed L1 block height.
    async fn l1_height(&self) -> anyhow::Result<u64>;

    /// Latest observed L2 block height.
    async fn l2_height(&self) -> anyhow::Result<u64>;

    /// Builds the inclusion proof for the batch containing `l2_index`, using
    /// only L1 state at or below `l1_height_ceiling`. Never returns a
    /// partially assembled proof.
    async fn batch_proof(
        &self,
        l2_index: u64,
        l1_height_ceiling: u64,
    ) -> Result<ProofPayload, ProofFetchError>;
}
