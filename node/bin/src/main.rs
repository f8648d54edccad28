//! Process entry point: loads configuration, bootstraps both chain
//! connections and the contract set, then hands control to the polling
//! engine until a shutdown signal arrives.
//!
//! Any bootstrap failure terminates the process with a non-zero status;
//! a signal-driven stop exits with zero.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::Context;
use proof_oracle_contract_interface::RollupContracts;
use proof_oracle_engine::{HttpProofStore, OracleConfig, PollingOracle};
use proof_oracle_proof_source::{RollupProofSource, ensure_connected};
use smart_config::value::ExposeSecret;
use smart_config::{ConfigRepository, ConfigSchema, DescribeConfig, Environment};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
use url::Url;
use vise_exporter::MetricsExporter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    proof_oracle_observability::init_logging();

    let config = load_config().context("loading configuration")?;

    let signer = PrivateKeySigner::from_str(config.l1_wallet_key.expose_secret())
        .context("failed to parse the L1 wallet key")?;
    tracing::info!(operator = %signer.address(), "using L1 operator account");

    let registry_address = Address::from_str(&config.address_registry)
        .context("failed to parse the address registry")?;
    let proof_store_url =
        Url::parse(&config.proof_store_url).context("failed to parse the proof store URL")?;

    let l1_provider: DynProvider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect(&config.l1_rpc_url)
        .await
        .context("building the L1 provider")?
        .erased();
    let l2_provider: DynProvider = ProviderBuilder::new()
        .connect(&config.l2_rpc_url)
        .await
        .context("building the L2 provider")?
        .erased();

    // L1 first; if it is unreachable the L2 endpoint is never probed.
    ensure_connected("L1", &l1_provider).await?;
    ensure_connected("L2", &l2_provider).await?;

    let contracts = RollupContracts::resolve(registry_address, l1_provider.clone()).await?;

    let source = RollupProofSource::new(
        l1_provider,
        l2_provider,
        contracts,
        config.l1_start_offset,
    );
    let sink = HttpProofStore::new(&proof_store_url)?;
    let oracle = PollingOracle::initialize(
        source,
        sink,
        config.polling_interval,
        config.safety_lag,
    )
    .await?;

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_listener(cancel.clone()));
    tokio::spawn(metrics_exporter(config.prometheus_port, cancel.clone()));

    oracle.run(cancel).await
}

fn load_config() -> anyhow::Result<OracleConfig> {
    let mut schema = ConfigSchema::default();
    schema.insert(&OracleConfig::DESCRIPTION, "oracle")?;
    let repo = ConfigRepository::new(&schema).with(Environment::prefixed("ORACLE_"));
    Ok(repo.single::<OracleConfig>()?.parse()?)
}

async fn shutdown_listener(cancel: CancellationToken) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for the shutdown signal");
        return;
    }
    tracing::info!("received shutdown signal");
    cancel.cancel();
}

async fn metrics_exporter(port: u16, stop: CancellationToken) {
    let bind_address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let exporter = MetricsExporter::default()
        .with_graceful_shutdown(async move { stop.cancelled().await });
    if let Err(err) = exporter.start(bind_address).await {
        tracing::error!(%err, "metrics exporter failed");
    }
}
