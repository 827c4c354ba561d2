// Plain-text views of the worksheet, its grade and the story book.

use {
    crate::{
        analysis::management_for_class,
        models::{Grade, StoryRegistry, Worksheet},
    },
    std::fmt::Write,
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(field: &str, value: impl ToString) -> FieldRow {
    FieldRow {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[derive(Tabled)]
struct StoryRow {
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Anchor TF")]
    anchor: String,
    #[tabled(rename = "Story")]
    story: String,
    #[tabled(rename = "Correlation")]
    correlation: String,
}

fn table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Inputs, HTF context, scores and the management plan for the final class.
pub fn render_overview(worksheet: &Worksheet, registry: &StoryRegistry, grade: &Grade) -> String {
    let context = worksheet.story_context(registry);
    let d = &worksheet.demand;
    let s = &worksheet.swoop;
    let date = if worksheet.date.is_empty() {
        "-"
    } else {
        worksheet.date.as_str()
    };

    let inputs = vec![
        row("Pair", worksheet.pair),
        row("Date", date),
        row("Session", worksheet.session),
        row("News", worksheet.news),
        row(
            "HTF context",
            format!(
                "{} • {} • {}",
                context.anchor,
                context.story.label(),
                context.correlation
            ),
        ),
        row("Demand: breach", d.breach),
        row("Demand: volume", d.volume),
        row("Demand: correlation", d.correlation),
        row("Demand: MA flow", d.ma_flow.label()),
        row("Demand: HTF story (synced)", d.htf_story.label()),
        row("Demand: caused by news", d.caused_by_news),
        row("Swoop: discount", s.discount),
        row("Swoop: opposite party in", s.opposite_in),
        row("Swoop: clarity", s.clarity),
        row("Swoop: correlation", s.correlation),
        row("Swoop: volume", s.volume),
    ];

    let scores = vec![
        row("Demand score", grade.demand),
        row("Swoop score", grade.swoop),
        row("Base class (demand)", grade.base_class),
        row("Downgrade steps", grade.downgrade_steps),
        row("Final class", grade.adjusted_class),
        row("Blended score", format!("{}/100", grade.blended_pct)),
    ];

    let plan = management_for_class(grade.adjusted_class);

    let mut out = String::new();
    let _ = writeln!(out, "{}", table(inputs));
    let _ = writeln!(out, "{}", table(scores));
    if grade.was_downgraded() {
        let _ = writeln!(
            out,
            "Swoop confidence is low: final class downgraded from {} to {}.",
            grade.base_class, grade.adjusted_class
        );
    }
    let _ = writeln!(out, "\n{}", plan.title);
    for bullet in plan.bullets {
        let _ = writeln!(out, "  - {}", bullet);
    }

    let notes = [
        ("Reminders", &worksheet.notes.reminders),
        ("Quotes", &worksheet.notes.quotes),
        ("Notes", &worksheet.notes.notes),
        ("Demand notes", &worksheet.notes.demand_notes),
        ("Swoop notes", &worksheet.notes.swoop_notes),
    ];
    for (label, text) in notes.iter().filter(|(_, t)| !t.is_empty()) {
        let _ = writeln!(out, "\n{}: {}", label, text);
    }
    out
}

pub fn render_story_book(registry: &StoryRegistry) -> String {
    let rows = registry
        .entries()
        .map(|e| StoryRow {
            pair: e.pair.to_string(),
            anchor: e.anchor.to_string(),
            story: e.story.label().to_string(),
            correlation: e.correlation.to_string(),
        })
        .collect();
    format!("{}\n{} pairs", table(rows), registry.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::grade_worksheet,
        config::{DEFAULTS, GRADING},
        domain::SwoopClarity,
        models::WorksheetUpdate,
    };

    #[test]
    fn test_overview_mentions_class_and_plan() {
        let registry = StoryRegistry::new(&DEFAULTS.story);
        let sheet = Worksheet::new(&DEFAULTS.worksheet, &registry);
        let grade = grade_worksheet(&sheet, &GRADING);
        let text = render_overview(&sheet, &registry, &grade);

        assert!(text.contains("AUDUSD"));
        assert!(text.contains("8 / 11"));
        assert!(text.contains("84/100"));
        assert!(text.contains("B class plan"));
        assert!(!text.contains("downgraded"));
    }

    #[test]
    fn test_overview_explains_downgrade() {
        let registry = StoryRegistry::new(&DEFAULTS.story);
        let sheet = Worksheet::new(&DEFAULTS.worksheet, &registry)
            .apply(&WorksheetUpdate::SwoopClarity(SwoopClarity::Maybe), &registry);
        let grade = grade_worksheet(&sheet, &GRADING);
        let text = render_overview(&sheet, &registry, &grade);
        assert!(text.contains("downgraded from B to C"));
        assert!(text.contains("C class plan"));
    }

    #[test]
    fn test_story_book_lists_every_pair() {
        let registry = StoryRegistry::new(&DEFAULTS.story);
        let text = render_story_book(&registry);
        assert!(text.contains("USDJPY"));
        assert!(text.contains("AUDCAD"));
        assert!(text.ends_with("28 pairs"));
    }
}
