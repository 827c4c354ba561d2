//! Factory defaults for the story book and the worksheet.
//! Passed into the registry/worksheet constructors; never mutated.

use crate::{
    domain::{
        AnchorTimeframe, Breach, BreachVolume, Correlation, Discount, MaFlow, NewsImpact,
        OppositeIn, Pair, Story, SwoopClarity, TradingSession, YesNo,
    },
    models::{Demand, Swoop},
};

pub struct StoryDefaults {
    pub anchor: AnchorTimeframe,
    pub story: Story,
    pub correlation: Correlation,
}

pub struct WorksheetDefaults {
    pub pair: Pair,
    pub date: &'static str,
    pub session: TradingSession,
    pub news: NewsImpact,
    pub demand: Demand,
    pub swoop: Swoop,
    pub quotes: &'static str,
    /// Journal endpoint. Empty until the user configures one.
    pub relay_url: &'static str,
}

pub struct SetupDefaults {
    pub story: StoryDefaults,
    pub worksheet: WorksheetDefaults,
}

pub const DEFAULTS: SetupDefaults = SetupDefaults {
    story: StoryDefaults {
        anchor: AnchorTimeframe::Daily,
        story: Story::Hold,
        correlation: Correlation::Partial,
    },
    worksheet: WorksheetDefaults {
        pair: Pair::AUDUSD,
        date: "",
        session: TradingSession::Asia,
        news: NewsImpact::None,
        demand: Demand {
            breach: Breach::Strong,
            volume: BreachVolume::High,
            correlation: Correlation::Full,
            ma_flow: MaFlow::Full,
            // Overwritten by the registry as soon as the worksheet is built
            htf_story: Story::Swoop,
            caused_by_news: YesNo::No,
        },
        swoop: Swoop {
            discount: Discount::Deal,
            opposite_in: OppositeIn::Yes,
            clarity: SwoopClarity::Clear,
            correlation: Correlation::Full,
            volume: YesNo::Yes,
        },
        quotes: "Play the long game. Protect capital. Small wins stack.",
        relay_url: "",
    },
};
