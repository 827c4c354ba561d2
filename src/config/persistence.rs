//! File persistence and export configuration
use crate::domain::Pair;

/// Configuration for worksheet / story book state files
pub struct StatePersistenceConfig {
    /// Default directory holding both state files
    pub directory: &'static str,
    /// Active worksheet (pair, inputs, notes, relay endpoint)
    pub worksheet_file: &'static str,
    /// HTF story book, one entry per pair
    pub stories_file: &'static str,
}

/// Configuration for exported snapshots
pub struct ExportConfig {
    pub directory: &'static str,
    pub filename_base: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub state: StatePersistenceConfig,
    pub export: ExportConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    state: StatePersistenceConfig {
        directory: ".",
        worksheet_file: ".setup_worksheet.json",
        stories_file: ".htf_stories.json",
    },
    export: ExportConfig {
        directory: "exports",
        filename_base: "trade-setup",
    },
};

/// Export filename for a pair.
/// Example: "trade-setup-AUDUSD.csv"
pub fn export_filename(pair: Pair, extension: &str) -> String {
    format!(
        "{}-{}.{}",
        PERSISTENCE.export.filename_base,
        pair.code(),
        extension
    )
}
