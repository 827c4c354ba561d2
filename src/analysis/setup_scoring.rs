//! Demand and swoop sub-scores.
//!
//! Pure, total, deterministic. Every catalog value has a weight, so there is no error path.

use crate::{
    domain::{
        Breach, BreachVolume, Correlation, Discount, MaFlow, OppositeIn, Story, SwoopClarity,
        YesNo,
    },
    models::{Demand, ScoreResult, Swoop},
};

pub const DEMAND_MAX: u32 = 11;
pub const SWOOP_MAX: u32 = 10;

fn correlation_weight(c: Correlation) -> u32 {
    match c {
        Correlation::Full => 3,
        Correlation::Partial => 1,
        Correlation::None => 0,
    }
}

fn story_weight(s: Story) -> u32 {
    match s {
        Story::Pullback => 1,
        Story::Swoop => 2,
        Story::Hold => 0,
        Story::Fomo => 2,
        Story::Dash => 3,
        Story::On => 2,
    }
}

pub fn score_demand(d: &Demand) -> ScoreResult {
    let breach = match d.breach {
        Breach::Strong => 2,
        Breach::Ok => 1,
    };
    let volume = match d.volume {
        BreachVolume::High => 1,
        BreachVolume::Normal => 0,
    };
    let ma_flow = match d.ma_flow {
        MaFlow::Full => 2,
        MaFlow::Mixed => 1,
    };
    // caused_by_news is informational only

    let score = breach
        + volume
        + correlation_weight(d.correlation)
        + ma_flow
        + story_weight(d.htf_story);

    ScoreResult {
        score,
        max: DEMAND_MAX,
    }
}

pub fn score_swoop(s: &Swoop) -> ScoreResult {
    let discount = match s.discount {
        Discount::Deal => 2,
        Discount::NoDeal => 1,
    };
    let opposite_in = match s.opposite_in {
        OppositeIn::Yes => 2,
        OppositeIn::Maybe => 1,
    };
    let clarity = match s.clarity {
        SwoopClarity::Clear => 2,
        SwoopClarity::Maybe => 0,
    };
    let volume = match s.volume {
        YesNo::Yes => 1,
        YesNo::No => 0,
    };

    let score = discount + opposite_in + clarity + correlation_weight(s.correlation) + volume;

    ScoreResult {
        score,
        max: SWOOP_MAX,
    }
}
