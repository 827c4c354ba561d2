use {
    crate::{
        config::StoryDefaults,
        domain::{AnchorTimeframe, Correlation, Pair, Story},
        models::hydrate::field_or,
    },
    serde::{Deserialize, Serialize, Serializer},
    serde_json::Value,
};

/// Current higher-timeframe narrative for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEntry {
    pub pair: Pair,
    pub anchor: AnchorTimeframe,
    pub story: Story,
    pub correlation: Correlation,
}

impl StoryEntry {
    pub fn from_defaults(pair: Pair, defaults: &StoryDefaults) -> Self {
        Self {
            pair,
            anchor: defaults.anchor,
            story: defaults.story,
            correlation: defaults.correlation,
        }
    }

    /// Merge the recognised fields of a persisted entry over `self`. `pair` is never taken from `raw`.
    fn merged_with(self, raw: &Value) -> Self {
        Self {
            pair: self.pair,
            anchor: field_or(raw, "anchor", self.anchor),
            story: field_or(raw, "story", self.story),
            correlation: field_or(raw, "correlation", self.correlation),
        }
    }
}

/// Partial edit of a story entry. `None` fields are left as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoryUpdate {
    pub anchor: Option<AnchorTimeframe>,
    pub story: Option<Story>,
    pub correlation: Option<Correlation>,
}

impl StoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.anchor.is_none() && self.story.is_none() && self.correlation.is_none()
    }
}

/// HTF story book.
///
/// INVARIANT: holds exactly one entry per catalog pair, stored at index `pair as usize`.
/// Entries are only ever overwritten, never removed, so `get` is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRegistry {
    entries: Vec<StoryEntry>,
}

impl StoryRegistry {
    pub fn new(defaults: &StoryDefaults) -> Self {
        let entries = Pair::all()
            .map(|pair| StoryEntry::from_defaults(pair, defaults))
            .collect();
        Self { entries }
    }

    /// Rebuild from a persisted JSON object keyed by pair code, per-pair merged over defaults.
    /// Unknown pair keys are dropped; anything that is not an object yields the defaults.
    pub fn hydrate(raw: &Value, defaults: &StoryDefaults) -> Self {
        let entries = Pair::all()
            .map(|pair| {
                let base = StoryEntry::from_defaults(pair, defaults);
                match raw.get(pair.code()) {
                    Some(stored) => base.merged_with(stored),
                    None => base,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, pair: Pair) -> &StoryEntry {
        &self.entries[pair as usize]
    }

    /// Merge `update` into the entry for `pair`. Returns true if anything changed.
    pub fn set(&mut self, pair: Pair, update: &StoryUpdate) -> bool {
        let entry = &mut self.entries[pair as usize];
        let before = *entry;

        if let Some(anchor) = update.anchor {
            entry.anchor = anchor;
        }
        if let Some(story) = update.story {
            entry.story = story;
        }
        if let Some(correlation) = update.correlation {
            entry.correlation = correlation;
        }

        *entry != before
    }

    pub fn entries(&self) -> impl Iterator<Item = &StoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StoryRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (e.pair, e)))
    }
}
