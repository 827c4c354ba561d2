mod reminders;

pub use reminders::{
    RelayEnv, RelayOutcome, dispatch_due_reminders, run_reminder_relay,
};
