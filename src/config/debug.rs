//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every registry -> worksheet HTF story correction.
    pub log_sync: bool,

    /// Log sub-scores, base class and downgrade steps on each grading.
    pub log_grading: bool,

    /// Log state file loads/saves and hydrate fallbacks.
    pub log_persistence: bool,

    /// Log each journal / messenger request.
    pub log_relay: bool,
}

pub const DF: LogFlags = LogFlags {
    log_sync: true,
    log_grading: false,
    log_persistence: true,
    log_relay: true,
};
