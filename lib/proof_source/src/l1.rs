use crate::types::{BatchHeader, ProofPayload};
use crate::{ProofFetchError, ProofSource};
use alloy::eips::BlockId;
use alloy::primitives::{B256, Bytes, U256};
use alloy::providers::{DynProvider, Provider};
use anyhow::Context;
use async_trait::async_trait;
use proof_oracle_contract_interface::RollupContracts;

/// Proof source backed by the resolved rollup contracts.
///
/// Batch headers are recovered from the `*BatchAppended` events. The event
/// scan is bounded below by the contract deployment offset and above by the
/// caller-supplied ceiling, so state inside the reorg risk window is never
/// consulted.
#[derive(Debug, Clone)]
pub struct RollupProofSource {
    l1_provider: DynProvider,
    l2_provider: DynProvider,
    contracts: RollupContracts,
    l1_start_offset: u64,
}

impl RollupProofSource {
    pub fn new(
        l1_provider: DynProvider,
        l2_provider: DynProvider,
        contracts: RollupContracts,
        l1_start_offset: u64,
    ) -> Self {
        Self {
            l1_provider,
            l2_provider,
            contracts,
            l1_start_offset,
        }
    }

    async fn find_state_batch(
        &self,
        index: u64,
        ceiling: u64,
    ) -> anyhow::Result<Option<BatchHeader>> {
        let events = self
            .contracts
            .state_commitment_chain
            .StateBatchAppended_filter()
            .from_block(self.l1_start_offset)
            .to_block(ceiling)
            .query()
            .await
            .context("querying StateBatchAppended events")?;
        let mut headers = Vec::with_capacity(events.len());
        for (event, log) in events {
            headers.push(batch_header(
                event.batchIndex,
                event.batchRoot,
                event.batchSize,
                event.prevTotalElements,
                event.extraData,
                log.block_number,
            )?);
        }
        Ok(locate_batch(headers, index))
    }

    async fn find_transaction_batch(
        &self,
        index: u64,
        ceiling: u64,
    ) -> anyhow::Result<Option<BatchHeader>> {
        let events = self
            .contracts
            .canonical_transaction_chain
            .TransactionBatchAppended_filter()
            .from_block(self.l1_start_offset)
            .to_block(ceiling)
            .query()
            .await
            .context("querying TransactionBatchAppended events")?;
        let mut headers = Vec::with_capacity(events.len());
        for (event, log) in events {
            headers.push(batch_header(
                event.batchIndex,
                event.batchRoot,
                event.batchSize,
                event.prevTotalElements,
                event.extraData,
                log.block_number,
            )?);
        }
        Ok(locate_batch(headers, index))
    }
}

#[async_trait]
impl ProofSource for RollupProofSource {
    async fn l1_height(&self) -> anyhow::Result<u64> {
        self.l1_provider
            .get_block_number()
            .await
            .context("reading L1 block height")
    }

    async fn l2_height(&self) -> anyhow::Result<u64> {
        self.l2_provider
            .get_block_number()
            .await
            .context("reading L2 block height")
    }

    async fn batch_proof(
        &self,
        l2_index: u64,
        l1_height_ceiling: u64,
    ) -> Result<ProofPayload, ProofFetchError> {
        let total_elements = self
            .contracts
            .state_commitment_chain
            .getTotalElements()
            .block(BlockId::number(l1_height_ceiling))
            .call()
            .await
            .context("reading committed element count")?;
        let total_elements = to_u64(total_elements, "total committed elements")?;
        if l2_index >= total_elements {
            return Err(ProofFetchError::NotYetAvailable(l2_index));
        }

        // The element count says the index is committed, but both batch
        // headers still have to be visible below the ceiling; a half-found
        // proof is reported as not-yet-available, never delivered.
        let Some(state_batch) = self.find_state_batch(l2_index, l1_height_ceiling).await? else {
            return Err(ProofFetchError::NotYetAvailable(l2_index));
        };
        let Some(transaction_batch) = self
            .find_transaction_batch(l2_index, l1_height_ceiling)
            .await?
        else {
            return Err(ProofFetchError::NotYetAvailable(l2_index));
        };

        let element_offset = l2_index - state_batch.prev_total_elements;
        Ok(serde_json::json!({
            "stateRootBatchHeader": state_batch,
            "transactionBatchHeader": transaction_batch,
            "batchElementIndex": element_offset,
        }))
    }
}

/// Picks the batch whose element window covers `index`, if any.
pub(crate) fn locate_batch(headers: Vec<BatchHeader>, index: u64) -> Option<BatchHeader> {
    headers.into_iter().find(|h| h.contains_element(index))
}

pub(crate) fn batch_header(
    batch_index: U256,
    batch_root: B256,
    batch_size: U256,
    prev_total_elements: U256,
    extra_data: Bytes,
    l1_block_number: Option<u64>,
) -> anyhow::Result<BatchHeader> {
    Ok(BatchHeader {
        batch_index: to_u64(batch_index, "batch index")?,
        batch_root,
        batch_size: to_u64(batch_size, "batch size")?,
        prev_total_elements: to_u64(prev_total_elements, "previous total elements")?,
        extra_data,
        l1_block_number: l1_block_number.context("batch event log is missing a block number")?,
    })
}

fn to_u64(value: U256, what: &'static str) -> anyhow::Result<u64> {
    u64::try_from(value).map_err(|_| anyhow::anyhow!("{what} out of u64 range: {value}"))
}
