// Worksheet + story book state files. Last write wins; unreadable files fall back to defaults.

use {
    crate::{
        config::{PERSISTENCE, StoryDefaults, WorksheetDefaults},
        models::{StoryRegistry, Worksheet},
    },
    anyhow::{Context, Result},
    serde::Serialize,
    serde_json::Value,
    std::{
        fs::{self, File},
        io::{BufReader, BufWriter, Write},
        path::{Path, PathBuf},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub worksheet: PathBuf,
    pub stories: PathBuf,
}

impl StatePaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            worksheet: dir.join(PERSISTENCE.state.worksheet_file),
            stories: dir.join(PERSISTENCE.state.stories_file),
        }
    }
}

impl Default for StatePaths {
    fn default() -> Self {
        Self::in_dir(PERSISTENCE.state.directory)
    }
}

/// Parsed JSON from `path`, or None if the file is missing or not valid JSON.
fn read_json(path: &Path) -> Option<Value> {
    if !path.exists() {
        return None;
    }

    let parsed: Result<Value> = File::open(path)
        .map_err(anyhow::Error::from)
        .and_then(|file| Ok(serde_json::from_reader(BufReader::new(file))?));

    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!(
                "Ignoring unreadable state file {} ({}). Using defaults.",
                path.display(),
                e
            );
            None
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create state file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    #[cfg(debug_assertions)]
    if DF.log_persistence {
        log::info!("Saved {}", path.display());
    }
    Ok(())
}

pub fn load_registry(path: &Path, defaults: &StoryDefaults) -> StoryRegistry {
    match read_json(path) {
        Some(raw) => StoryRegistry::hydrate(&raw, defaults),
        None => StoryRegistry::new(defaults),
    }
}

/// Load the worksheet and bring it in line with `registry`.
pub fn load_worksheet(
    path: &Path,
    defaults: &WorksheetDefaults,
    registry: &StoryRegistry,
) -> Worksheet {
    match read_json(path) {
        Some(raw) => Worksheet::hydrate(&raw, defaults, registry),
        None => Worksheet::new(defaults, registry),
    }
}

pub fn save_registry(path: &Path, registry: &StoryRegistry) -> Result<()> {
    write_json(path, registry)
}

pub fn save_worksheet(path: &Path, worksheet: &Worksheet) -> Result<()> {
    write_json(path, worksheet)
}
