//! Sorting and grouping over a list of pallets.
//!
//! Every function borrows its input and returns new collections; the input
//! order is never touched.

use chrono::NaiveDate;

use crate::pallet::Pallet;

/// Pallets sharing the same expiration day.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpirationGroup {
    /// Calendar day; [`NaiveDate::MAX`] collects pallets with no known expiration.
    pub key: NaiveDate,
    /// Members in input order.
    pub pallets: Vec<Pallet>,
}

impl ExpirationGroup {
    /// True for the group of pallets with no known expiration.
    pub fn is_unbounded(&self) -> bool {
        self.key == NaiveDate::MAX
    }
}

/// Stable sort by total weight, lightest first.
pub fn sort_by_weight_asc(pallets: &[Pallet]) -> Vec<Pallet> {
    let mut sorted = pallets.to_vec();
    sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    sorted
}

/// Stable sort by expiration, earliest first; unknown expirations go last.
pub fn sort_by_expiration_asc(pallets: &[Pallet]) -> Vec<Pallet> {
    let mut sorted = pallets.to_vec();
    sorted.sort_by_key(Pallet::expiration_key);
    sorted
}

/// The `n` pallets that expire first.
pub fn earliest_expiring(pallets: &[Pallet], n: usize) -> Vec<Pallet> {
    let mut sorted = sort_by_expiration_asc(pallets);
    sorted.truncate(n);
    sorted
}

/// Partition pallets by expiration day.
///
/// Groups come out in the order their key is first seen; use
/// [`sort_groups_by_key`] when the report needs them chronological.
pub fn group_by_expiration_day(pallets: &[Pallet]) -> Vec<ExpirationGroup> {
    let mut groups: Vec<ExpirationGroup> = Vec::new();
    for pallet in pallets {
        let key = pallet.expiration_key();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.pallets.push(pallet.clone()),
            None => groups.push(ExpirationGroup {
                key,
                pallets: vec![pallet.clone()],
            }),
        }
    }
    groups
}

/// Order groups by key, earliest day first.
pub fn sort_groups_by_key(mut groups: Vec<ExpirationGroup>) -> Vec<ExpirationGroup> {
    groups.sort_by_key(|g| g.key);
    groups
}
