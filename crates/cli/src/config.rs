use std::path::PathBuf;

use palletstore_observability::LogConfig;

/// File the program reads and writes when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "Example.json";

/// Runtime settings for one program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file holding the pallet list.
    pub data_path: PathBuf,
    /// How many of the earliest-expiring pallets the final section lists.
    pub report_top: usize,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            report_top: 3,
            log: LogConfig::default(),
        }
    }
}
