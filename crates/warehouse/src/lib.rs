//! Warehouse domain module.
//!
//! Boxes, pallets and the derived quantities (weight, volume, expiration),
//! plus sorting/grouping and text reporting. Pure domain logic: no IO.

pub mod box_item;
pub mod dimensions;
pub mod pallet;
pub mod query;
pub mod report;

pub use box_item::{BoxItem, Expiration, SHELF_LIFE_DAYS};
pub use dimensions::Dimensions;
pub use pallet::{PALLET_TARE_WEIGHT, Pallet};
pub use query::{
    ExpirationGroup, earliest_expiring, group_by_expiration_day, sort_by_expiration_asc,
    sort_by_weight_asc, sort_groups_by_key,
};
pub use report::{REPORT_SEPARATOR, format_groups, format_pallet, format_pallets};
