// Category catalog: closed value sets for every input field
mod catalog;
mod pair;

pub use catalog::{
    AnchorTimeframe, Breach, BreachVolume, Correlation, Discount, MaFlow, NewsImpact, OppositeIn,
    Story, SwoopClarity, TradingSession, YesNo,
};
pub use pair::Pair;
