//! Pallet persistence boundary.
//!
//! The domain never touches the filesystem; callers hand a list of pallets to a
//! [`PalletStore`] and get the same list back on the next run.

pub mod json_file;
pub mod record;
pub mod r#trait;

pub use json_file::JsonFileStore;
pub use record::{BoxRecord, PalletRecord};
pub use r#trait::{PalletStore, StoreError, StoreResult};
