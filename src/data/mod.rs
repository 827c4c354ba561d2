mod export;
mod journal;
mod messenger;
mod state_io;

pub use {
    export::{ExportFormat, SNAPSHOT_FIELDS, Snapshot, write_export},
    journal::{DueReminder, HttpJournal, JournalBackend},
    messenger::{Messenger, TelegramBot},
    state_io::{StatePaths, load_registry, load_worksheet, save_registry, save_worksheet},
};
