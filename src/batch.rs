//! Splitting bulk lookups to fit the backend's per-call id limit.

use futures_util::future::join_all;
use std::future::Future;

use crate::error::{BridgeError, Result};

/// Most ids the thumbnail endpoints accept in a single call.
pub const THUMBNAIL_BATCH_LIMIT: usize = 10;

/// Runs `call` once per contiguous chunk of at most `chunk_size` ids and
/// concatenates the results.
///
/// All chunks are dispatched together. The output follows dispatch order no
/// matter which chunk finishes first. If any chunk fails, the whole lookup
/// fails with the fault of the earliest failing chunk and results from chunks
/// that succeeded are dropped.
/// An empty `ids` makes no calls.
pub async fn batched<I, R, F, Fut>(ids: &[I], chunk_size: usize, mut call: F) -> Result<Vec<R>>
where
    I: Clone,
    F: FnMut(Vec<I>) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
{
    if chunk_size == 0 {
        return Err(BridgeError::Custom("Chunk size must be at least 1".into()));
    }

    let pending: Vec<Fut> = ids
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, chunk)| {
            tracing::trace!("Dispatching chunk {index} with {} ids", chunk.len());
            call(chunk.to_vec())
        })
        .collect();
    let chunk_count = pending.len();

    // Futures only start when polled, so every chunk is driven to completion
    // before the results are inspected; stopping at the first error would
    // leave later chunks unsent.
    let results = join_all(pending)
        .await
        .into_iter()
        .collect::<Result<Vec<Vec<R>>>>()
        .map_err(|e| {
            tracing::warn!("Batched lookup of {} ids failed: {e}", ids.len());
            e
        })?;

    tracing::debug!("Batched lookup of {} ids finished in {chunk_count} chunks", ids.len());
    Ok(results.into_iter().flatten().collect())
}
