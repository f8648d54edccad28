use super::connect::check_with_retries;
use super::l1::locate_batch;
use super::types::{BatchHeader, TransactionBatchProof};
use alloy::primitives::{B256, Bytes};
use std::sync::atomic::{AtomicUsize, Ordering};

fn header(batch_index: u64, prev_total_elements: u64, batch_size: u64) -> BatchHeader {
    BatchHeader {
        batch_index,
        batch_root: B256::repeat_byte(batch_index as u8),
        batch_size,
        prev_total_elements,
        extra_data: Bytes::new(),
        l1_block_number: 1_000 + batch_index,
    }
}

/// Check that the liveness probe succeeds when the final budgeted attempt
/// succeeds, and that no budget is left unused before that.
#[tokio::test(start_paused = true)]
async fn connect_succeeds_on_last_attempt() {
    let attempts = AtomicUsize::new(0);
    let result = check_with_retries("l1", || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if attempt < 10 {
                anyhow::bail!("connection refused");
            }
            Ok(attempt)
        }
    })
    .await;
    assert_eq!(result.unwrap(), 10);
    assert_eq!(attempts.load(Ordering::SeqCst), 10);
}

/// Check that the probe stops after exactly ten attempts.
#[tokio::test(start_paused = true)]
async fn connect_gives_up_after_budget() {
    let attempts = AtomicUsize::new(0);
    let result: anyhow::Result<()> = check_with_retries("l2", || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { anyhow::bail!("connection refused") }
    })
    .await;
    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 10);
}

/// An early success leaves the remaining budget unspent.
#[tokio::test(start_paused = true)]
async fn connect_returns_on_first_success() {
    let attempts = AtomicUsize::new(0);
    let result = check_with_retries("l1", || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Ok(42u64) }
    })
    .await;
    assert_eq!(result.unwrap(), 42);
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[test]
fn batch_window_location() {
    let headers = vec![header(0, 0, 50), header(1, 50, 30), header(2, 80, 20)];

    assert_eq!(locate_batch(headers.clone(), 0).unwrap().batch_index, 0);
    assert_eq!(locate_batch(headers.clone(), 49).unwrap().batch_index, 0);
    assert_eq!(locate_batch(headers.clone(), 50).unwrap().batch_index, 1);
    assert_eq!(locate_batch(headers.clone(), 79).unwrap().batch_index, 1);
    assert_eq!(locate_batch(headers.clone(), 99).unwrap().batch_index, 2);
    // Past everything committed so far.
    assert!(locate_batch(headers, 100).is_none());
}

#[test]
fn element_window_boundaries() {
    let h = header(3, 100, 10);
    assert!(!h.contains_element(99));
    assert!(h.contains_element(100));
    assert!(h.contains_element(109));
    assert!(!h.contains_element(110));
}

/// The store upserts on `id`, so the record must carry the index under that
/// key with the payload flattened beside it.
#[test]
fn proof_record_serializes_index_under_id() {
    let proof = TransactionBatchProof {
        index: 99,
        proof: serde_json::json!({
            "stateRootBatchHeader": { "batchIndex": 4 },
            "batchElementIndex": 7,
        }),
    };
    let value = serde_json::to_value(&proof).unwrap();
    assert_eq!(value["id"], 99);
    assert_eq!(value["batchElementIndex"], 7);
    assert_eq!(value["stateRootBatchHeader"]["batchIndex"], 4);
}
