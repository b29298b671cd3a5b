//! Plain-text report blocks for pallets and expiration groups.

use core::fmt::Write as _;

use chrono::NaiveDate;

use palletstore_core::Entity;

use crate::pallet::Pallet;
use crate::query::ExpirationGroup;

/// Line printed between report sections.
pub const REPORT_SEPARATOR: &str = "==============================";

/// One pallet as a multi-line block, newline terminated.
pub fn format_pallet(pallet: &Pallet) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Pallet {}:", pallet.id());
    let _ = writeln!(out, "\tExpiration date: {}", format_date(pallet.expiration_date()));
    let _ = writeln!(out, "\tWeight: {}", pallet.weight());
    let _ = writeln!(out, "\tVolume: {}", pallet.volume());
    out
}

pub fn format_pallets(pallets: &[Pallet]) -> String {
    pallets.iter().map(format_pallet).collect()
}

/// Each group's header followed by its pallets, in the order given.
pub fn format_groups(groups: &[ExpirationGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let key = (!group.is_unbounded()).then_some(group.key);
        let _ = writeln!(out, "Group by expiration date ({}):", format_date(key));
        out.push_str(&format_pallets(&group.pallets));
    }
    out
}

fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "never".to_string(),
    }
}
