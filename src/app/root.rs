use {
    crate::{
        analysis::grade_worksheet,
        config::{GradingConfig, RelayClientConfig, SetupDefaults},
        data::{
            HttpJournal, Snapshot, StatePaths, load_registry, load_worksheet, save_registry,
            save_worksheet,
        },
        domain::Pair,
        models::{Grade, StoryRegistry, StoryUpdate, Worksheet, WorksheetUpdate, resync},
        utils::now_utc,
    },
    anyhow::{Context, Result},
    chrono::{DateTime, Utc},
};

/// Result of a journal send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// No endpoint configured. Nothing was sent.
    MissingEndpoint,
    Sent,
}

/// The story book and the active worksheet, kept in sync and persisted after every edit.
///
/// Single writer: one `App` per state directory.
pub struct App {
    paths: StatePaths,
    grading: GradingConfig,
    registry: StoryRegistry,
    worksheet: Worksheet,
}

impl App {
    /// Load both records from `paths` (defaults where absent or unreadable).
    pub fn load(paths: StatePaths, defaults: &SetupDefaults, grading: GradingConfig) -> Self {
        let registry = load_registry(&paths.stories, &defaults.story);
        let worksheet = load_worksheet(&paths.worksheet, &defaults.worksheet, &registry);
        Self {
            paths,
            grading,
            registry,
            worksheet,
        }
    }

    pub fn worksheet(&self) -> &Worksheet {
        &self.worksheet
    }

    pub fn registry(&self) -> &StoryRegistry {
        &self.registry
    }

    pub fn grade(&self) -> Grade {
        grade_worksheet(&self.worksheet, &self.grading)
    }

    pub fn snapshot_at(&self, at: DateTime<Utc>) -> Snapshot {
        Snapshot::build(&self.worksheet, &self.registry, &self.grade(), at)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_at(now_utc())
    }

    pub fn update_worksheet(&mut self, update: &WorksheetUpdate) -> Result<()> {
        self.worksheet = self.worksheet.apply(update, &self.registry);
        save_worksheet(&self.paths.worksheet, &self.worksheet)
    }

    /// Edit one story book entry. The worksheet is resynced (and saved) in case `pair` is active.
    pub fn update_story(&mut self, pair: Pair, update: &StoryUpdate) -> Result<()> {
        if !self.registry.set(pair, update) {
            return Ok(());
        }
        save_registry(&self.paths.stories, &self.registry)?;

        let synced = resync(self.worksheet.clone(), &self.registry);
        if synced != self.worksheet {
            self.worksheet = synced;
            save_worksheet(&self.paths.worksheet, &self.worksheet)?;
        }
        Ok(())
    }

    /// Back to factory defaults. The story book is kept unless `stories` is set.
    pub fn reset(&mut self, defaults: &SetupDefaults, stories: bool) -> Result<()> {
        if stories {
            self.registry = StoryRegistry::new(&defaults.story);
            save_registry(&self.paths.stories, &self.registry)?;
        }
        self.worksheet = Worksheet::new(&defaults.worksheet, &self.registry);
        save_worksheet(&self.paths.worksheet, &self.worksheet)
    }

    /// POST the current snapshot to the configured journal endpoint. No retry.
    pub async fn send_to_journal(&self) -> Result<SendOutcome> {
        if self.worksheet.relay_url.trim().is_empty() {
            log::warn!("No journal endpoint configured; nothing sent");
            return Ok(SendOutcome::MissingEndpoint);
        }

        let journal = HttpJournal::new(&self.worksheet.relay_url, &RelayClientConfig::default())?;
        journal
            .post_snapshot(&self.snapshot())
            .await
            .context("Failed to send")?;
        Ok(SendOutcome::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DEFAULTS, GRADING},
        domain::Story,
        models::SetupClass,
    };
    use std::{fs, path::PathBuf};

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("setup_grader_app_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_story_edit_flows_into_active_worksheet_and_grade() {
        let dir = scratch("story_flow");
        let mut app = App::load(StatePaths::in_dir(&dir), &DEFAULTS, GRADING);
        assert_eq!(app.grade().base_class, SetupClass::B);

        app.update_story(
            Pair::AUDUSD,
            &StoryUpdate {
                story: Some(Story::Dash),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(app.worksheet().demand.htf_story, Story::Dash);
        assert_eq!(app.grade().base_class, SetupClass::A);

        // Persisted: a fresh load sees the same state
        let reloaded = App::load(StatePaths::in_dir(&dir), &DEFAULTS, GRADING);
        assert_eq!(reloaded.worksheet(), app.worksheet());
        assert_eq!(reloaded.registry(), app.registry());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_inactive_pair_story_edit_leaves_worksheet() {
        let dir = scratch("inactive");
        let mut app = App::load(StatePaths::in_dir(&dir), &DEFAULTS, GRADING);
        let before = app.worksheet().clone();

        app.update_story(
            Pair::USDCHF,
            &StoryUpdate {
                story: Some(Story::On),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(app.worksheet(), &before);

        app.update_worksheet(&WorksheetUpdate::Pair(Pair::USDCHF)).unwrap();
        assert_eq!(app.worksheet().demand.htf_story, Story::On);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_reset_keeps_story_book_by_default() {
        let dir = scratch("reset");
        let mut app = App::load(StatePaths::in_dir(&dir), &DEFAULTS, GRADING);
        app.update_story(
            Pair::AUDUSD,
            &StoryUpdate {
                story: Some(Story::Fomo),
                ..Default::default()
            },
        )
        .unwrap();
        app.update_worksheet(&WorksheetUpdate::Date("2025-01-02".into())).unwrap();

        app.reset(&DEFAULTS, false).unwrap();
        assert!(app.worksheet().date.is_empty());
        assert_eq!(app.worksheet().demand.htf_story, Story::Fomo);

        app.reset(&DEFAULTS, true).unwrap();
        assert_eq!(app.worksheet().demand.htf_story, Story::Hold);

        let _ = fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_send_without_endpoint_makes_no_request() {
        let dir = scratch("send_missing");
        let app = App::load(StatePaths::in_dir(&dir), &DEFAULTS, GRADING);
        let outcome = app.send_to_journal().await.unwrap();
        assert_eq!(outcome, SendOutcome::MissingEndpoint);
        let _ = fs::remove_dir_all(dir);
    }
}
