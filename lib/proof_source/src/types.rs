use alloy::primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};

/// Opaque batch-inclusion data produced by the proof source. The engine and
/// the delivery sink pass it through without looking inside.
pub type ProofPayload = serde_json::Value;

/// One `*BatchAppended` commitment recovered from an L1 event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchHeader {
    pub batch_index: u64,
    pub batch_root: B256,
    pub batch_size: u64,
    pub prev_total_elements: u64,
    pub extra_data: Bytes,
    /// L1 block in which the batch was appended.
    pub l1_block_number: u64,
}

impl BatchHeader {
    /// Whether the element window `[prev_total, prev_total + size)` covers
    /// `index`.
    pub fn contains_element(&self, index: u64) -> bool {
        index >= self.prev_total_elements && index - self.prev_total_elements < self.batch_size
    }
}

/// Proof record delivered downstream, keyed by the L2 transaction index.
///
/// The index serializes under `id`: the store upserts on that key, which is
/// what makes redelivery after a lost acknowledgment safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionBatchProof {
    #[serde(rename = "id")]
    pub index: u64,
    #[serde(flatten)]
    pub proof: ProofPayload,
}
