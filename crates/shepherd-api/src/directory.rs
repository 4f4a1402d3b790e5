//! Directory-index maintenance shared by the provider and review routes.
//!
//! Every mutation commits locally and then flushes the whole index blob
//! back to S3 under the held lock, so concurrent Lambda instances
//! serialize through the ETag precondition.

use tantivy::IndexWriter;
use uuid::Uuid;

use shepherd_core::models::provider::Provider;
use shepherd_search::index::LoadedIndex;
use shepherd_search::{flush, mutate};

use crate::error::ApiError;
use crate::state::AppState;

const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Insert or replace a provider in the directory index and flush to S3.
pub async fn reindex_provider(state: &AppState, provider: &Provider) -> Result<(), ApiError> {
    let mut loaded = state.index.lock().await;
    let mut writer: IndexWriter = loaded.index.writer(WRITER_HEAP_BYTES)?;
    mutate::index_provider(&loaded.index, &writer, provider)?;
    mutate::commit(&mut writer)?;
    flush_directory(state, &mut loaded).await
}

/// Remove a provider from the directory index and flush to S3.
pub async fn deindex_provider(state: &AppState, id: Uuid) -> Result<(), ApiError> {
    let mut loaded = state.index.lock().await;
    let mut writer: IndexWriter = loaded.index.writer(WRITER_HEAP_BYTES)?;
    mutate::remove_provider(&loaded.index, &writer, &id.to_string())?;
    mutate::commit(&mut writer)?;
    flush_directory(state, &mut loaded).await
}

async fn flush_directory(state: &AppState, loaded: &mut LoadedIndex) -> Result<(), ApiError> {
    let etag = if loaded.etag.is_empty() {
        // Freshly created index; nothing in S3 to guard against yet.
        flush::flush_index_unconditional(&state.s3, &state.bucket, &loaded.index_dir).await?
    } else {
        flush::flush_index(&state.s3, &state.bucket, &loaded.index_dir, &loaded.etag).await?
    };
    loaded.etag = etag;
    Ok(())
}
