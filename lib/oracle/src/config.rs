use smart_config::{DescribeConfig, DeserializeConfig, config, value::SecretString};
use std::time::Duration;

/// Configuration of the proof oracle process.
#[derive(Clone, Debug, DescribeConfig, DeserializeConfig)]
pub struct OracleConfig {
    /// JSON-RPC endpoint of the L1 chain.
    #[config(default_t = "http://localhost:8545".into())]
    pub l1_rpc_url: String,

    /// JSON-RPC endpoint of the L2 chain.
    #[config(default_t = "http://localhost:9545".into())]
    pub l2_rpc_url: String,

    /// Private key of the L1 account the oracle operates as.
    pub l1_wallet_key: SecretString,

    /// Fixed delay between poll ticks. Constant pacing, no backoff.
    #[config(default_t = Duration::from_secs(5))]
    pub polling_interval: Duration,

    /// First L1 block to scan for batch-append events (the deployment block
    /// of the chain contracts).
    #[config(default_t = 0)]
    pub l1_start_offset: u64,

    /// Number of blocks subtracted from the L1 head when looking up proofs,
    /// keeping lookups out of the reorganization risk window.
    #[config(default_t = 100)]
    pub safety_lag: u64,

    /// Address of the on-chain registry used to resolve the rollup contracts.
    #[config(default_t = "0x100Dd3b414Df5BbA2B542864fF94aF8024aFdf3a".into())]
    pub address_registry: String,

    /// Base URL of the downstream proof store.
    #[config(default_t = "http://127.0.0.1:3000".into())]
    pub proof_store_url: String,

    /// Port the Prometheus exporter listens on.
    #[config(default_t = 3312)]
    pub prometheus_port: u16,
}
