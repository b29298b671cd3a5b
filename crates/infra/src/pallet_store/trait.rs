use std::path::PathBuf;

use thiserror::Error;

use palletstore_core::IdAllocator;
use palletstore_warehouse::Pallet;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("pallet file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("pallet file {} is not accessible: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pallet file {} is malformed: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Whole-list persistence for pallets.
///
/// `write` replaces everything previously stored; `read` returns the full list.
/// Restored pallets keep their ids, and every id is noted on the allocator
/// passed to `read`.
pub trait PalletStore: Send + Sync {
    fn write(&self, pallets: &[Pallet]) -> StoreResult<()>;

    fn read(&self, ids: &IdAllocator) -> StoreResult<Vec<Pallet>>;
}
