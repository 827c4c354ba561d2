use {
    serde_json::json,
    setup_grader::{
        analysis::{DEMAND_MAX, SWOOP_MAX, grade_worksheet, management_for_class, score_demand},
        config::{DEFAULTS, GRADING},
        domain::{
            Breach, BreachVolume, Correlation, Discount, MaFlow, OppositeIn, Pair, Story,
            SwoopClarity, YesNo,
        },
        models::{
            Demand, SetupClass, StoryRegistry, StoryUpdate, Swoop, Worksheet, WorksheetUpdate,
            resync,
        },
    },
    strum::IntoEnumIterator,
};

fn all_demands() -> Vec<Demand> {
    let mut out = Vec::new();
    for breach in Breach::iter() {
        for volume in BreachVolume::iter() {
            for correlation in Correlation::iter() {
                for ma_flow in MaFlow::iter() {
                    for htf_story in Story::iter() {
                        out.push(Demand {
                            breach,
                            volume,
                            correlation,
                            ma_flow,
                            htf_story,
                            caused_by_news: YesNo::No,
                        });
                    }
                }
            }
        }
    }
    out
}

fn all_swoops() -> Vec<Swoop> {
    let mut out = Vec::new();
    for discount in Discount::iter() {
        for opposite_in in OppositeIn::iter() {
            for clarity in SwoopClarity::iter() {
                for correlation in Correlation::iter() {
                    for volume in YesNo::iter() {
                        out.push(Swoop {
                            discount,
                            opposite_in,
                            clarity,
                            correlation,
                            volume,
                        });
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_every_input_combination_grades_consistently() {
    let registry = StoryRegistry::new(&DEFAULTS.story);
    let base = Worksheet::new(&DEFAULTS.worksheet, &registry);

    let demands = all_demands();
    let swoops = all_swoops();
    assert_eq!(demands.len(), 144);
    assert_eq!(swoops.len(), 48);

    for demand in &demands {
        for swoop in &swoops {
            let mut sheet = base.clone();
            sheet.demand = *demand;
            sheet.swoop = *swoop;
            let grade = grade_worksheet(&sheet, &GRADING);

            assert!(grade.demand.score <= DEMAND_MAX);
            assert!(grade.swoop.score <= SWOOP_MAX);
            assert!(grade.blended_pct <= 100);
            assert!(grade.adjusted_class.rank() >= grade.base_class.rank());
            assert!(grade.downgrade_steps <= 2);

            if swoop.clarity == SwoopClarity::Maybe || swoop.discount == Discount::NoDeal {
                assert!(grade.downgrade_steps >= 1);
                assert_ne!(grade.adjusted_class, SetupClass::A);
            }
        }
    }
}

#[test]
fn test_caused_by_news_never_scores() {
    for demand in all_demands() {
        let flagged = Demand {
            caused_by_news: YesNo::Yes,
            ..demand
        };
        assert_eq!(score_demand(&demand), score_demand(&flagged));
    }
}

#[test]
fn test_best_and_worst_setups() {
    let registry = StoryRegistry::new(&DEFAULTS.story);
    let mut best = Worksheet::new(&DEFAULTS.worksheet, &registry);
    best.demand = Demand {
        breach: Breach::Strong,
        volume: BreachVolume::High,
        correlation: Correlation::Full,
        ma_flow: MaFlow::Full,
        htf_story: Story::Dash,
        caused_by_news: YesNo::No,
    };
    best.swoop = Swoop {
        discount: Discount::Deal,
        opposite_in: OppositeIn::Yes,
        clarity: SwoopClarity::Clear,
        correlation: Correlation::Full,
        volume: YesNo::Yes,
    };
    let grade = grade_worksheet(&best, &GRADING);
    assert_eq!(grade.demand.score, 11);
    assert_eq!(grade.swoop.score, 10);
    assert_eq!(grade.blended_pct, 100);
    assert_eq!(grade.adjusted_class, SetupClass::A);
    assert!(!grade.was_downgraded());

    let mut worst = best.clone();
    worst.demand = Demand {
        breach: Breach::Ok,
        volume: BreachVolume::Normal,
        correlation: Correlation::None,
        ma_flow: MaFlow::Mixed,
        htf_story: Story::Hold,
        caused_by_news: YesNo::Yes,
    };
    worst.swoop = Swoop {
        discount: Discount::NoDeal,
        opposite_in: OppositeIn::Maybe,
        clarity: SwoopClarity::Maybe,
        correlation: Correlation::None,
        volume: YesNo::No,
    };
    let grade = grade_worksheet(&worst, &GRADING);
    assert_eq!(grade.demand.score, 2);
    assert_eq!(grade.swoop.score, 2);
    // 18.18 * 0.6 + 20 * 0.4 = 18.9
    assert_eq!(grade.blended_pct, 19);
    assert_eq!(grade.base_class, SetupClass::C);
    assert_eq!(grade.adjusted_class, SetupClass::C);
    assert_eq!(management_for_class(grade.adjusted_class).title, "C class plan");
}

#[test]
fn test_story_edits_flow_into_worksheet_only_for_its_pair() {
    let mut registry = StoryRegistry::new(&DEFAULTS.story);
    let sheet = Worksheet::new(&DEFAULTS.worksheet, &registry);
    assert_eq!(sheet.pair, Pair::AUDUSD);
    assert_eq!(sheet.demand.htf_story, Story::Hold);

    let dash = StoryUpdate {
        story: Some(Story::Dash),
        ..Default::default()
    };
    registry.set(Pair::EURUSD, &dash);
    let sheet = resync(sheet, &registry);
    assert_eq!(sheet.demand.htf_story, Story::Hold);

    let sheet = sheet.apply(&WorksheetUpdate::Pair(Pair::EURUSD), &registry);
    assert_eq!(sheet.demand.htf_story, Story::Dash);
    assert_eq!(sheet.story_context(&registry).story, Story::Dash);

    // Story scoring reaches the grade through the sync.
    let grade = grade_worksheet(&sheet, &GRADING);
    assert_eq!(grade.demand.score, 11);

    let again = resync(sheet.clone(), &registry);
    assert_eq!(again, sheet);
}

#[test]
fn test_registry_survives_garbage_state() {
    let raw = json!({
        "EURUSD": { "story": "fomo", "anchor": "W" },
        "GBPJPY": "not an entry",
        "XAUUSD": { "story": "dash" },
        "USDJPY": { "correlation": "sideways" },
    });
    let registry = StoryRegistry::hydrate(&raw, &DEFAULTS.story);
    assert_eq!(registry.len(), Pair::COUNT);
    for pair in Pair::all() {
        assert_eq!(registry.get(pair).pair, pair);
    }
    assert_eq!(registry.get(Pair::EURUSD).story, Story::Fomo);
    assert_eq!(registry.get(Pair::GBPJPY).story, Story::Hold);
    assert_eq!(registry.get(Pair::USDJPY).correlation, Correlation::Partial);

    let worksheet = Worksheet::hydrate(&json!([1, 2, 3]), &DEFAULTS.worksheet, &registry);
    assert_eq!(worksheet, Worksheet::new(&DEFAULTS.worksheet, &registry));
}
