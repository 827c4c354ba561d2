mod grade;
mod hydrate;
mod story;
mod sync;
mod worksheet;

pub use {
    grade::{Grade, ScoreResult, SetupClass},
    story::{StoryEntry, StoryRegistry, StoryUpdate},
    sync::resync,
    worksheet::{Demand, EDITABLE_FIELDS, NoteField, Notes, Swoop, Worksheet, WorksheetUpdate},
};
