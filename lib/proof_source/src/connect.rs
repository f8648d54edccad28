use anyhow::Context;
use backon::{ConstantBuilder, Retryable};
use std::future::Future;
use std::time::Duration;

use alloy::providers::Provider;

/// Liveness-check budget: total attempts, not retries.
pub const CONNECT_ATTEMPTS: usize = 10;
/// Fixed pause between liveness attempts.
pub const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Verifies that `provider` answers a network-identity query, retrying up to
/// [`CONNECT_ATTEMPTS`] times with a fixed delay. Returns the chain id.
///
/// Exhausting the budget is fatal to bootstrap; the caller must not retry.
pub async fn ensure_connected<P: Provider>(chain: &str, provider: &P) -> anyhow::Result<u64> {
    tracing::info!(chain, "trying to connect");
    let chain_id =
        check_with_retries(chain, || async { Ok(provider.get_chain_id().await?) }).await?;
    tracing::info!(chain, chain_id, "successfully connected");
    Ok(chain_id)
}

pub(crate) async fn check_with_retries<T, Fut>(
    chain: &str,
    op: impl FnMut() -> Fut,
) -> anyhow::Result<T>
where
    Fut: Future<Output = anyhow::Result<T>>,
{
    op.retry(
        ConstantBuilder::default()
            .with_delay(CONNECT_RETRY_DELAY)
            .with_max_times(CONNECT_ATTEMPTS - 1),
    )
    .notify(|err, _dur| {
        tracing::warn!(chain, %err, "liveness check failed, retrying");
    })
    .await
    .with_context(|| format!("unable to reach the {chain} network, check that its endpoint is correct"))
}
