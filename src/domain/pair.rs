use {
    serde::{Deserialize, Serialize},
    strum::IntoEnumIterator,
    strum_macros::{AsRefStr, Display, EnumIter, EnumString},
};

/// The 28 major-cross currency pairs the worksheet can be filled in for.
/// Identity key of the story registry.
#[allow(clippy::upper_case_acronyms)]
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
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Pair {
    AUDCAD,
    AUDCHF,
    AUDJPY,
    AUDNZD,
    AUDUSD,
    CADCHF,
    CADJPY,
    CHFJPY,
    EURAUD,
    EURCAD,
    EURCHF,
    EURGBP,
    EURJPY,
    EURNZD,
    EURUSD,
    GBPAUD,
    GBPCAD,
    GBPCHF,
    GBPJPY,
    GBPNZD,
    GBPUSD,
    NZDCAD,
    NZDCHF,
    NZDJPY,
    NZDUSD,
    USDCAD,
    USDCHF,
    USDJPY,
}

impl Pair {
    pub const COUNT: usize = 28;

    /// Every pair in the catalog, in catalog order.
    pub fn all() -> impl Iterator<Item = Pair> {
        Pair::iter()
    }

    pub fn code(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_catalog_has_28_unique_pairs() {
        let pairs: Vec<Pair> = Pair::all().collect();
        assert_eq!(pairs.len(), Pair::COUNT);

        let mut codes: Vec<&str> = pairs.iter().map(|p| p.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Pair::COUNT);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Pair::from_str("audusd").unwrap(), Pair::AUDUSD);
        assert_eq!(Pair::from_str("NZDCHF").unwrap(), Pair::NZDCHF);
        assert!(Pair::from_str("BTCUSD").is_err());
    }

    #[test]
    fn test_serializes_as_plain_code() {
        let json = serde_json::to_string(&Pair::USDCAD).unwrap();
        assert_eq!(json, "\"USDCAD\"");
        assert_eq!(Pair::USDCAD.to_string(), "USDCAD");
    }
}
