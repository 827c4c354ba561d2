// Flat journal snapshot of a graded worksheet, plus its JSON and CSV renderings.

use {
    crate::{
        config::{PERSISTENCE, export_filename},
        domain::{
            AnchorTimeframe, Breach, BreachVolume, Correlation, Discount, MaFlow, NewsImpact,
            OppositeIn, Pair, Story, SwoopClarity, TradingSession, YesNo,
        },
        models::{Grade, SetupClass, StoryRegistry, Worksheet},
        utils::iso_timestamp,
    },
    anyhow::{Context, Result},
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    std::{
        fs,
        path::{Path, PathBuf},
    },
    strum_macros::Display,
};

/// Column order shared by both renderings. Must match the field order of `Snapshot`.
pub const SNAPSHOT_FIELDS: [&str; 31] = [
    "timestamp",
    "pair",
    "date",
    "session",
    "news",
    "anchor",
    "story",
    "story_corr",
    "d_breach",
    "d_volume",
    "d_corr",
    "d_ma",
    "d_htf",
    "d_news_caused",
    "s_discount",
    "s_oppIn",
    "s_swoop",
    "s_corr",
    "s_vol",
    "d_score",
    "d_max",
    "s_score",
    "s_max",
    "finalPct",
    "baseClass",
    "adjustedClass",
    "reminders",
    "quotes",
    "notes",
    "demandNotes",
    "swoopNotes",
];

/// Everything the journal needs about one setup: inputs, story context, scores and classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: String,
    pub pair: Pair,
    pub date: String,
    pub session: TradingSession,
    pub news: NewsImpact,

    pub anchor: AnchorTimeframe,
    pub story: Story,
    pub story_corr: Correlation,

    pub d_breach: Breach,
    pub d_volume: BreachVolume,
    pub d_corr: Correlation,
    pub d_ma: MaFlow,
    pub d_htf: Story,
    pub d_news_caused: YesNo,

    pub s_discount: Discount,
    #[serde(rename = "s_oppIn")]
    pub s_opp_in: OppositeIn,
    pub s_swoop: SwoopClarity,
    pub s_corr: Correlation,
    pub s_vol: YesNo,

    pub d_score: u32,
    pub d_max: u32,
    pub s_score: u32,
    pub s_max: u32,
    #[serde(rename = "finalPct")]
    pub final_pct: u32,
    #[serde(rename = "baseClass")]
    pub base_class: SetupClass,
    #[serde(rename = "adjustedClass")]
    pub adjusted_class: SetupClass,

    pub reminders: String,
    pub quotes: String,
    pub notes: String,
    #[serde(rename = "demandNotes")]
    pub demand_notes: String,
    #[serde(rename = "swoopNotes")]
    pub swoop_notes: String,
}

/// Free text goes into the CSV JSON-quoted, with double quotes swapped for single ones
/// so the journal sheet never sees a bare `"`.
fn csv_text(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?.replace('"', "'"))
}

impl Snapshot {
    pub fn build(
        worksheet: &Worksheet,
        registry: &StoryRegistry,
        grade: &Grade,
        at: DateTime<Utc>,
    ) -> Self {
        let context = worksheet.story_context(registry);
        let d = &worksheet.demand;
        let s = &worksheet.swoop;

        Self {
            timestamp: iso_timestamp(at),
            pair: worksheet.pair,
            date: worksheet.date.clone(),
            session: worksheet.session,
            news: worksheet.news,

            anchor: context.anchor,
            story: context.story,
            story_corr: context.correlation,

            d_breach: d.breach,
            d_volume: d.volume,
            d_corr: d.correlation,
            d_ma: d.ma_flow,
            d_htf: d.htf_story,
            d_news_caused: d.caused_by_news,

            s_discount: s.discount,
            s_opp_in: s.opposite_in,
            s_swoop: s.clarity,
            s_corr: s.correlation,
            s_vol: s.volume,

            d_score: grade.demand.score,
            d_max: grade.demand.max,
            s_score: grade.swoop.score,
            s_max: grade.swoop.max,
            final_pct: grade.blended_pct,
            base_class: grade.base_class,
            adjusted_class: grade.adjusted_class,

            reminders: worksheet.notes.reminders.clone(),
            quotes: worksheet.notes.quotes.clone(),
            notes: worksheet.notes.notes.clone(),
            demand_notes: worksheet.notes.demand_notes.clone(),
            swoop_notes: worksheet.notes.swoop_notes.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Cell values in `SNAPSHOT_FIELDS` order.
    fn csv_cells(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.timestamp.clone(),
            self.pair.to_string(),
            self.date.clone(),
            self.session.to_string(),
            self.news.to_string(),
            self.anchor.to_string(),
            self.story.to_string(),
            self.story_corr.to_string(),
            self.d_breach.to_string(),
            self.d_volume.to_string(),
            self.d_corr.to_string(),
            self.d_ma.to_string(),
            self.d_htf.to_string(),
            self.d_news_caused.to_string(),
            self.s_discount.to_string(),
            self.s_opp_in.to_string(),
            self.s_swoop.to_string(),
            self.s_corr.to_string(),
            self.s_vol.to_string(),
            self.d_score.to_string(),
            self.d_max.to_string(),
            self.s_score.to_string(),
            self.s_max.to_string(),
            self.final_pct.to_string(),
            self.base_class.to_string(),
            self.adjusted_class.to_string(),
            csv_text(&self.reminders)?,
            csv_text(&self.quotes)?,
            csv_text(&self.notes)?,
            csv_text(&self.demand_notes)?,
            csv_text(&self.swoop_notes)?,
        ])
    }

    /// Header line plus one data row.
    pub fn to_csv(&self) -> Result<String> {
        Ok(format!(
            "{}\n{}",
            SNAPSHOT_FIELDS.join(","),
            self.csv_cells()?.join(",")
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn render(&self, snapshot: &Snapshot) -> Result<String> {
        match self {
            Self::Json => snapshot.to_json_pretty(),
            Self::Csv => snapshot.to_csv(),
        }
    }
}

/// Write the snapshot to `<dir>/trade-setup-<PAIR>.<ext>` (dir defaults to the export directory).
pub fn write_export(snapshot: &Snapshot, format: ExportFormat, dir: Option<&Path>) -> Result<PathBuf> {
    let dir = dir.unwrap_or_else(|| Path::new(PERSISTENCE.export.directory));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(export_filename(snapshot.pair, &format.to_string()));
    fs::write(&path, format.render(snapshot)?)
        .with_context(|| format!("Failed to write export {}", path.display()))?;
    Ok(path)
}
