//! On-disk shape of pallets and boxes.
//!
//! Kept separate from the domain types so that decoding goes through the same
//! validation as construction, and restored ids reach the allocator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use palletstore_core::{DomainResult, Entity, IdAllocator, PalletId};
use palletstore_warehouse::{BoxItem, Dimensions, Pallet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalletRecord {
    pub id: u64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub boxes: Vec<BoxRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxRecord {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub weight: f64,
    pub production_date: Option<NaiveDate>,
    /// Explicit expiration only; a derived date is recomputed on load.
    pub expiration_date: Option<NaiveDate>,
}

impl From<&BoxItem> for BoxRecord {
    fn from(item: &BoxItem) -> Self {
        let dims = item.dimensions();
        Self {
            width: dims.width(),
            height: dims.height(),
            depth: dims.depth(),
            weight: item.weight(),
            production_date: item.production_date(),
            expiration_date: item.explicit_expiration(),
        }
    }
}

impl From<&Pallet> for PalletRecord {
    fn from(pallet: &Pallet) -> Self {
        let dims = pallet.dimensions();
        Self {
            id: pallet.id().get(),
            width: dims.width(),
            height: dims.height(),
            depth: dims.depth(),
            boxes: pallet.boxes().iter().map(BoxRecord::from).collect(),
        }
    }
}

impl BoxRecord {
    pub fn into_box(self) -> DomainResult<BoxItem> {
        let dims = Dimensions::new(self.width, self.height, self.depth)?;
        Ok(BoxItem::new(dims, self.weight)?
            .produced_on(self.production_date)
            .expires_on(self.expiration_date))
    }
}

impl PalletRecord {
    /// Validate and rebuild the pallet, noting its id on `ids`.
    ///
    /// Nothing is noted if any field is invalid.
    pub fn into_pallet(self, ids: &IdAllocator) -> DomainResult<Pallet> {
        let id = PalletId::new(self.id)?;
        let dims = Dimensions::new(self.width, self.height, self.depth)?;
        let boxes = self
            .boxes
            .into_iter()
            .map(BoxRecord::into_box)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Pallet::with_id(ids, id, dims, boxes))
    }
}
