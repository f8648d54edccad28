use crate::{
    IAddressRegistry, ICanonicalTransactionChain, IExecutionManager, IFraudVerifier,
    IStateCommitmentChain,
};
use alloy::primitives::Address;
use alloy::providers::DynProvider;

/// Names under which the rollup contracts are registered, in resolution order.
pub const STATE_COMMITMENT_CHAIN: &str = "StateCommitmentChain";
pub const CANONICAL_TRANSACTION_CHAIN: &str = "CanonicalTransactionChain";
pub const FRAUD_VERIFIER: &str = "FraudVerifier";
pub const EXECUTION_MANAGER: &str = "ExecutionManager";

#[derive(Debug, thiserror::Error)]
pub enum ContractResolutionError {
    #[error("registry lookup for `{name}` failed: {source}")]
    Lookup {
        name: &'static str,
        #[source]
        source: alloy::contract::Error,
    },
    #[error("`{name}` is not registered (registry returned the zero address)")]
    Unregistered { name: &'static str },
}

/// The fixed set of L1 contracts the polling loop needs, resolved once at
/// bootstrap and read-only afterwards.
#[derive(Debug, Clone)]
pub struct RollupContracts {
    pub state_commitment_chain: IStateCommitmentChain::IStateCommitmentChainInstance<DynProvider>,
    pub canonical_transaction_chain:
        ICanonicalTransactionChain::ICanonicalTransactionChainInstance<DynProvider>,
    pub fraud_verifier: IFraudVerifier::IFraudVerifierInstance<DynProvider>,
    pub execution_manager: IExecutionManager::IExecutionManagerInstance<DynProvider>,
}

impl RollupContracts {
    /// Resolves every named contract through the registry at `registry_address`.
    ///
    /// Resolution is all-or-nothing: the first lookup that fails (or resolves
    /// to the zero address) aborts with an error naming the contract. There is
    /// no per-contract retry; a failure here is fatal to process start.
    pub async fn resolve(
        registry_address: Address,
        provider: DynProvider,
    ) -> Result<Self, ContractResolutionError> {
        let registry = IAddressRegistry::new(registry_address, provider.clone());
        tracing::info!(address = %registry_address, "connected to address registry");

        let state_commitment_chain = IStateCommitmentChain::new(
            resolve_one(&registry, STATE_COMMITMENT_CHAIN).await?,
            provider.clone(),
        );
        let canonical_transaction_chain = ICanonicalTransactionChain::new(
            resolve_one(&registry, CANONICAL_TRANSACTION_CHAIN).await?,
            provider.clone(),
        );
        let fraud_verifier =
            IFraudVerifier::new(resolve_one(&registry, FRAUD_VERIFIER).await?, provider.clone());
        let execution_manager = IExecutionManager::new(
            resolve_one(&registry, EXECUTION_MANAGER).await?,
            provider,
        );

        tracing::info!("resolved all rollup contracts");
        Ok(Self {
            state_commitment_chain,
            canonical_transaction_chain,
            fraud_verifier,
            execution_manager,
        })
    }
}

async fn resolve_one(
    registry: &IAddressRegistry::IAddressRegistryInstance<DynProvider>,
    name: &'static str,
) -> Result<Address, ContractResolutionError> {
    tracing::info!(name, "resolving contract through registry");
    let address = registry
        .getAddress(name.to_string())
        .call()
        .await
        .map_err(|source| ContractResolutionError::Lookup { name, source })?;
    if address == Address::ZERO {
        return Err(ContractResolutionError::Unregistered { name });
    }
    tracing::info!(name, %address, "resolved contract");
    Ok(address)
}
