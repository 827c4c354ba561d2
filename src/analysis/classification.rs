//! Classification policy: demand sets the base class, swoop confidence can only push it down.

use crate::{
    analysis::{score_demand, score_swoop},
    config::{GradingConfig, MANAGEMENT, ManagementPlan},
    domain::{Discount, SwoopClarity},
    models::{Grade, SetupClass, Swoop, Worksheet},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Base class from the demand percentage. Band lower bounds are inclusive.
pub fn classify(pct: f64, config: &GradingConfig) -> SetupClass {
    if pct >= config.classes.a_min_pct {
        SetupClass::A
    } else if pct >= config.classes.b_min_pct {
        SetupClass::B
    } else {
        SetupClass::C
    }
}

/// How many classes to drop, from swoop confidence.
///
/// A vague swoop or a missing discount forces at least one step (a floor, not an extra step).
pub fn downgrade_steps(swoop_pct: f64, swoop: &Swoop, config: &GradingConfig) -> u8 {
    let mut steps = if swoop_pct < config.downgrade.two_steps_below_pct {
        2
    } else if swoop_pct < config.downgrade.one_step_below_pct {
        1
    } else {
        0
    };

    if swoop.clarity == SwoopClarity::Maybe || swoop.discount == Discount::NoDeal {
        steps = steps.max(1);
    }

    steps
}

/// Move `base` down the A > B > C ladder by `steps`, clamped at C.
pub fn apply_downgrade(base: SetupClass, steps: u8) -> SetupClass {
    SetupClass::from_rank(base.rank().saturating_add(steps as usize))
}

/// Weighted blend of both percentages, rounded to the nearest integer.
pub fn blend(demand_pct: f64, swoop_pct: f64, config: &GradingConfig) -> u32 {
    let blended = demand_pct * config.blend.demand + swoop_pct * config.blend.swoop;
    blended.round().max(0.0) as u32
}

/// Score both halves of the worksheet and combine them into the final grade.
pub fn grade_worksheet(worksheet: &Worksheet, config: &GradingConfig) -> Grade {
    let demand = score_demand(&worksheet.demand);
    let swoop = score_swoop(&worksheet.swoop);
    let demand_pct = demand.pct();
    let swoop_pct = swoop.pct();

    let base_class = classify(demand_pct, config);
    let steps = downgrade_steps(swoop_pct, &worksheet.swoop, config);
    let adjusted_class = apply_downgrade(base_class, steps);

    #[cfg(debug_assertions)]
    if DF.log_grading {
        log::info!(
            "Grade {}: demand {} swoop {} base {} -{} => {}",
            worksheet.pair,
            demand,
            swoop,
            base_class,
            steps,
            adjusted_class
        );
    }

    Grade {
        demand,
        swoop,
        demand_pct,
        swoop_pct,
        base_class,
        downgrade_steps: steps,
        adjusted_class,
        blended_pct: blend(demand_pct, swoop_pct, config),
    }
}

/// Fixed management checklist for a final class.
pub fn management_for_class(class: SetupClass) -> &'static ManagementPlan {
    match class {
        SetupClass::A => &MANAGEMENT.a,
        SetupClass::B => &MANAGEMENT.b,
        SetupClass::C => &MANAGEMENT.c,
    }
}
