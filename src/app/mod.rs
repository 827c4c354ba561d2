mod report;
mod root;

pub use report::{render_overview, render_story_book};
pub use root::{App, SendOutcome};
