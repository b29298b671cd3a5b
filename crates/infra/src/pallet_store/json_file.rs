use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use palletstore_core::IdAllocator;
use palletstore_warehouse::Pallet;

use super::record::PalletRecord;
use super::r#trait::{PalletStore, StoreError, StoreResult};

/// Pallets stored as one pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parse_error(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Parse {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl PalletStore for JsonFileStore {
    fn write(&self, pallets: &[Pallet]) -> StoreResult<()> {
        let records: Vec<PalletRecord> = pallets.iter().map(PalletRecord::from).collect();

        // Encode before opening so an encoding failure leaves the old file intact.
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| self.io_error(e.into()))?;

        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            pallets = records.len(),
            "wrote pallet file"
        );
        Ok(())
    }

    fn read(&self, ids: &IdAllocator) -> StoreResult<Vec<Pallet>> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound {
                path: self.path.clone(),
            },
            _ => self.io_error(e),
        })?;

        let records: Vec<PalletRecord> =
            serde_json::from_str(&text).map_err(|e| self.parse_error(e.to_string()))?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut pallets = Vec::with_capacity(records.len());
        for (idx, record) in records.into_iter().enumerate() {
            if !seen.insert(record.id) {
                return Err(self.parse_error(format!(
                    "duplicate pallet id {} (index {idx})",
                    record.id
                )));
            }
            let pallet = record
                .into_pallet(ids)
                .map_err(|e| self.parse_error(format!("pallet at index {idx}: {e}")))?;
            pallets.push(pallet);
        }

        tracing::debug!(last_id = ids.last_issued(), "restored pallet ids");
        tracing::info!(
            path = %self.path.display(),
            pallets = pallets.len(),
            "read pallet file"
        );
        Ok(pallets)
    }
}
