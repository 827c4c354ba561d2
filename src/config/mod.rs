//! Configuration module for the setup grader.

// Can all be private now because we have a public re-export.
mod debug;
mod defaults;
mod grading;
mod management;
mod persistence;
mod relay;

// Re-export commonly used items
pub use debug::DF;
pub use defaults::{DEFAULTS, SetupDefaults, StoryDefaults, WorksheetDefaults};
pub use grading::{BlendWeights, ClassBands, DowngradeBands, GRADING, GradingConfig};
pub use management::{MANAGEMENT, ManagementConfig, ManagementPlan};
pub use persistence::{PERSISTENCE, export_filename};
pub use relay::{RELAY, RelayClientConfig};
