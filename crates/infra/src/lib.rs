//! Infrastructure layer: file persistence for the warehouse domain.

pub mod pallet_store;

pub use pallet_store::{JsonFileStore, PalletStore, StoreError, StoreResult};
