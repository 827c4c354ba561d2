//! Grading policy constants (Immutable Blueprints)

/// Demand percentage bands for the base class. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassBands {
    pub a_min_pct: f64,
    pub b_min_pct: f64,
}

/// Swoop percentage below which the base class is pushed down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DowngradeBands {
    /// Below this: two steps.
    pub two_steps_below_pct: f64,
    /// Below this (and at or above `two_steps_below_pct`): one step.
    pub one_step_below_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub demand: f64,
    pub swoop: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingConfig {
    pub classes: ClassBands,
    pub downgrade: DowngradeBands,
    pub blend: BlendWeights,
}

impl Default for GradingConfig {
    fn default() -> Self {
        GRADING
    }
}

pub const GRADING: GradingConfig = GradingConfig {
    classes: ClassBands {
        a_min_pct: 75.0,
        b_min_pct: 50.0,
    },
    downgrade: DowngradeBands {
        two_steps_below_pct: 35.0,
        one_step_below_pct: 55.0,
    },
    blend: BlendWeights {
        demand: 0.6,
        swoop: 0.4,
    },
};
