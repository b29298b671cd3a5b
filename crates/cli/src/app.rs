use std::io::Write;

use anyhow::Context;

use palletstore_core::IdAllocator;
use palletstore_infra::{JsonFileStore, PalletStore};
use palletstore_warehouse::{
    REPORT_SEPARATOR, earliest_expiring, format_groups, format_pallets, group_by_expiration_day,
    sort_by_weight_asc, sort_groups_by_key,
};

use crate::config::AppConfig;
use crate::seed;

/// Seed the inventory, save it, load it back and print the report to `out`.
///
/// A failed save is reported and the run goes on with whatever the file holds;
/// a failed load ends the run.
pub fn run(config: &AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let ids = IdAllocator::new();
    let pallets = seed::demo_inventory(&ids).context("failed to build demo inventory")?;

    let store = JsonFileStore::new(&config.data_path);
    if let Err(err) = store.write(&pallets) {
        tracing::error!(error = %err, "failed to save pallets");
        eprintln!("could not save pallets: {err}");
    }

    let restored = store
        .read(&ids)
        .with_context(|| format!("failed to load pallets from {}", config.data_path.display()))?;

    let by_weight = sort_by_weight_asc(&restored);
    let groups = sort_groups_by_key(group_by_expiration_day(&by_weight));
    out.write_all(format_groups(&groups).as_bytes())?;

    writeln!(out, "{REPORT_SEPARATOR}")?;

    let earliest = earliest_expiring(&restored, config.report_top);
    out.write_all(format_pallets(&earliest).as_bytes())?;
    out.flush()?;

    tracing::info!(
        pallets = restored.len(),
        groups = groups.len(),
        "report complete"
    );
    Ok(())
}
