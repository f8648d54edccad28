use async_trait::async_trait;
use proof_oracle_proof_source::TransactionBatchProof;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("store write failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store rejected proof for index {index}: HTTP {status}")]
    Rejected {
        index: u64,
        status: reqwest::StatusCode,
    },
}

/// Accepts one proof record per call. Performs exactly one write and never
/// retries internally; retrying is the polling engine's decision.
#[async_trait]
pub trait ProofSink: Send + Sync {
    async fn deliver(&self, proof: &TransactionBatchProof) -> Result<(), DeliveryError>;
}

/// Writes proof records to the downstream HTTP store.
///
/// The record carries the index as the store's `id` key, so redelivering the
/// same index after a lost acknowledgment overwrites the existing row instead
/// of creating a conflicting one.
#[derive(Debug, Clone)]
pub struct HttpProofStore {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpProofStore {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: base_url.join("proofs")?,
        })
    }
}

#[async_trait]
impl ProofSink for HttpProofStore {
    async fn deliver(&self, proof: &TransactionBatchProof) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(proof)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DeliveryError::Rejected {
                index: proof.index,
                status: response.status(),
            });
        }
        Ok(())
    }
}
