//! Bindings for the L1 contracts the oracle reads.
//!
//! The address registry is an on-chain directory; everything else is resolved
//! through it by name during bootstrap (see [`RollupContracts::resolve`]).

use alloy::sol;

mod registry;

pub use registry::{
    CANONICAL_TRANSACTION_CHAIN, ContractResolutionError, EXECUTION_MANAGER, FRAUD_VERIFIER,
    RollupContracts, STATE_COMMITMENT_CHAIN,
};

sol! {
    /// On-chain directory mapping contract names to deployed addresses.
    #[sol(rpc)]
    interface IAddressRegistry {
        function getAddress(string memory name) external view returns (address);
    }

    /// Chain of state-root batches committed by the rollup.
    #[sol(rpc)]
    interface IStateCommitmentChain {
        /// Emitted once per appended state-root batch.
        event StateBatchAppended(
            uint256 indexed batchIndex,
            bytes32 batchRoot,
            uint256 batchSize,
            uint256 prevTotalElements,
            bytes extraData
        );

        /// Total number of state roots committed so far.
        function getTotalElements() external view returns (uint256);

        /// Total number of batches committed so far.
        function getTotalBatches() external view returns (uint256);
    }

    /// Chain of L2 transaction batches committed by the sequencer.
    #[sol(rpc)]
    interface ICanonicalTransactionChain {
        /// Emitted once per appended transaction batch.
        event TransactionBatchAppended(
            uint256 indexed batchIndex,
            bytes32 batchRoot,
            uint256 batchSize,
            uint256 prevTotalElements,
            bytes extraData
        );

        /// Total number of L2 transactions committed so far.
        function getTotalElements() external view returns (uint256);

        /// Total number of batches committed so far.
        function getTotalBatches() external view returns (uint256);
    }

    /// Entry point for challenging a committed state root.
    #[sol(rpc)]
    interface IFraudVerifier {
        function getStateTransitioner(bytes32 preStateRoot) external view returns (address);
    }

    /// Execution environment parameters for the rollup VM.
    #[sol(rpc)]
    interface IExecutionManager {
        function getMaxTransactionGasLimit() external view returns (uint256);
    }
}
