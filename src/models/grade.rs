use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// A bounded sub-score. `score` is always within `0..=max`; `max` is fixed per scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub max: u32,
}

impl ScoreResult {
    /// Score as a percentage of max, unrounded.
    pub fn pct(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        100.0 * self.score as f64 / self.max as f64
    }
}

impl std::fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} ({:.0}%)", self.score, self.max, self.pct())
    }
}

/// Setup quality class. Declaration order is rank order: A is best, C is the floor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum SetupClass {
    A,
    B,
    C,
}

impl SetupClass {
    pub const ORDER: [SetupClass; 3] = [SetupClass::A, SetupClass::B, SetupClass::C];

    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn from_rank(rank: usize) -> Self {
        Self::ORDER[rank.min(Self::ORDER.len() - 1)]
    }
}

/// Full outcome of grading one worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub demand: ScoreResult,
    pub swoop: ScoreResult,
    pub demand_pct: f64,
    pub swoop_pct: f64,
    /// From the demand percentage alone.
    pub base_class: SetupClass,
    pub downgrade_steps: u8,
    /// Base class after the swoop downgrade. Drives the management plan.
    pub adjusted_class: SetupClass,
    /// 60/40 demand/swoop blend, rounded. Informational; may disagree with `adjusted_class`.
    pub blended_pct: u32,
}

impl Grade {
    pub fn was_downgraded(&self) -> bool {
        self.adjusted_class != self.base_class
    }
}
