//! Trade management checklists, one per final class.

pub struct ManagementPlan {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct ManagementConfig {
    pub a: ManagementPlan,
    pub b: ManagementPlan,
    pub c: ManagementPlan,
}

pub const MANAGEMENT: ManagementConfig = ManagementConfig {
    a: ManagementPlan {
        title: "A class plan",
        bullets: &[
            "Risk: higher than baseline if your plan allows",
            "Let the winner run toward higher time frame levels",
            "Scale partials only at key levels, avoid choking the move",
            "Trail behind fresh structure after each pause",
        ],
    },
    b: ManagementPlan {
        title: "B class plan",
        bullets: &[
            "Risk: standard",
            "Book Book at logical targets",
            "Allow some runner but keep expectations modest",
            "Tighten if correlation fades or volume dries up",
        ],
    },
    c: ManagementPlan {
        title: "C class plan",
        bullets: &[
            "Risk: reduced",
            "Book Book early and often",
            "Focus on precision entry and quick cleanup",
            "Avoid adding unless conditions upgrade",
        ],
    },
};
