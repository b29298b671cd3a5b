//! Demo inventory written on every run.

use chrono::NaiveDate;

use palletstore_core::{DomainError, DomainResult, IdAllocator};
use palletstore_warehouse::{BoxItem, Dimensions, Pallet};

fn date(y: i32, m: u32, d: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::validation(format!("invalid date {y}-{m:02}-{d:02}")))
}

fn item(
    (w, h, d): (f64, f64, f64),
    weight: f64,
    produced: Option<NaiveDate>,
    expires: Option<NaiveDate>,
) -> DomainResult<BoxItem> {
    Ok(BoxItem::new(Dimensions::new(w, h, d)?, weight)?
        .produced_on(produced)
        .expires_on(expires))
}

/// A small mixed inventory: dated and undated boxes, overrides, and one
/// pallet with no boxes at all.
pub fn demo_inventory(ids: &IdAllocator) -> DomainResult<Vec<Pallet>> {
    let euro = Dimensions::new(1.2, 0.15, 0.8)?;
    let half = Dimensions::new(0.8, 0.15, 0.6)?;

    Ok(vec![
        Pallet::new(
            ids,
            euro,
            vec![
                item((0.4, 0.3, 0.3), 12.0, Some(date(2024, 1, 1)?), None)?,
                item((0.4, 0.3, 0.3), 11.5, Some(date(2024, 1, 5)?), None)?,
                item((0.2, 0.2, 0.2), 3.0, None, Some(date(2024, 3, 20)?))?,
            ],
        ),
        Pallet::new(
            ids,
            half,
            vec![item((0.5, 0.4, 0.4), 25.0, Some(date(2024, 1, 1)?), None)?],
        ),
        Pallet::new(
            ids,
            euro,
            vec![
                item((0.6, 0.4, 0.4), 40.0, Some(date(2024, 2, 10)?), None)?,
                item((0.6, 0.4, 0.4), 38.0, Some(date(2024, 2, 12)?), Some(date(2024, 4, 10)?))?,
            ],
        ),
        Pallet::new(
            ids,
            half,
            vec![
                item((0.3, 0.3, 0.3), 8.0, None, None)?,
                item((0.3, 0.3, 0.3), 7.5, None, None)?,
            ],
        ),
        Pallet::new(ids, euro, Vec::new()),
        Pallet::new(
            ids,
            euro,
            vec![item((1.0, 0.5, 0.5), 60.0, None, Some(date(2024, 3, 20)?))?],
        ),
    ])
}
