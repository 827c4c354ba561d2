//! Closed enumerations that constrain every input field of the worksheet and the story book.
//!
//! Wire values (serde) match the persisted/exported format. `FromStr` accepts the same
//! values case-insensitively so the CLI can take them straight from the user.

use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Timeframe the higher-timeframe story is read on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum AnchorTimeframe {
    #[serde(rename = "M")]
    #[strum(serialize = "M")]
    Monthly,
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Weekly,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Daily,
    #[serde(rename = "4H")]
    #[strum(serialize = "4H")]
    FourHour,
    #[serde(rename = "1H")]
    #[strum(serialize = "1H")]
    OneHour,
}

/// Higher-timeframe narrative for a pair. Feeds the demand score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Story {
    Pullback,
    Swoop,
    Hold,
    Fomo,
    Dash,
    On,
}

impl Story {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pullback => "Pullback",
            Self::Swoop => "Swoop",
            Self::Hold => "Hold",
            Self::Fomo => "FOMO",
            Self::Dash => "Dash",
            Self::On => "ON",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Correlation {
    Full,
    Partial,
    None,
}

/// Strength of the break that created demand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Breach {
    Strong,
    Ok,
}

/// Activity on the demand breach.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BreachVolume {
    High,
    Normal,
}

/// Moving-average alignment. `Full` is labelled "Flow" for the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MaFlow {
    #[strum(to_string = "full", serialize = "flow")]
    Full,
    Mixed,
}

impl MaFlow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Flow",
            Self::Mixed => "Mixed",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Discount {
    Deal,
    NoDeal,
}

/// Whether the opposite party has stepped in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OppositeIn {
    Yes,
    Maybe,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SwoopClarity {
    Clear,
    Maybe,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TradingSession {
    Asia,
    London,
    #[serde(rename = "New York")]
    #[strum(to_string = "New York", serialize = "newyork", serialize = "ny")]
    NewYork,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum NewsImpact {
    #[serde(rename = "High Impact")]
    #[strum(to_string = "High Impact", serialize = "high")]
    High,
    #[serde(rename = "Medium Impact")]
    #[strum(to_string = "Medium Impact", serialize = "medium")]
    Medium,
    #[serde(rename = "None")]
    #[strum(serialize = "None")]
    None,
}
