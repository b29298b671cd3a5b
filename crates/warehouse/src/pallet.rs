use chrono::NaiveDate;

use palletstore_core::{Entity, IdAllocator, PalletId};

use crate::box_item::BoxItem;
use crate::dimensions::Dimensions;

/// Fixed weight of the pallet itself.
pub const PALLET_TARE_WEIGHT: f64 = 30.0;

/// Entity: a pallet footprint carrying boxes.
///
/// Weight, volume and expiration are derived from the boxes on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Pallet {
    id: PalletId,
    dimensions: Dimensions,
    boxes: Vec<BoxItem>,
}

impl Pallet {
    /// Create a pallet with the next id from `ids`.
    pub fn new(ids: &IdAllocator, dimensions: Dimensions, boxes: Vec<BoxItem>) -> Self {
        Self {
            id: ids.next_id(),
            dimensions,
            boxes,
        }
    }

    /// Create a pallet with a known id (e.g. restored from storage).
    ///
    /// The id is noted on `ids` so later automatic ids stay above it.
    pub fn with_id(
        ids: &IdAllocator,
        id: PalletId,
        dimensions: Dimensions,
        boxes: Vec<BoxItem>,
    ) -> Self {
        ids.note_id(id);
        Self {
            id,
            dimensions,
            boxes,
        }
    }

    pub fn id_typed(&self) -> PalletId {
        self.id
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Boxes in insertion order.
    pub fn boxes(&self) -> &[BoxItem] {
        &self.boxes
    }

    pub fn weight(&self) -> f64 {
        self.boxes.iter().map(BoxItem::weight).sum::<f64>() + PALLET_TARE_WEIGHT
    }

    pub fn volume(&self) -> f64 {
        self.boxes.iter().map(BoxItem::volume).sum::<f64>() + self.dimensions.volume()
    }

    /// Earliest expiration among the boxes; `None` if no box has one.
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.boxes.iter().filter_map(BoxItem::expiration_date).min()
    }

    /// Expiration used for ordering and grouping: an unknown expiration
    /// counts as the latest representable date.
    pub fn expiration_key(&self) -> NaiveDate {
        self.expiration_date().unwrap_or(NaiveDate::MAX)
    }
}

impl Entity for Pallet {
    type Id = PalletId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
