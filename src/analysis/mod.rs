mod classification;
mod setup_scoring;

pub use classification::{
    apply_downgrade, blend, classify, downgrade_steps, grade_worksheet, management_for_class,
};
pub use setup_scoring::{DEMAND_MAX, SWOOP_MAX, score_demand, score_swoop};
