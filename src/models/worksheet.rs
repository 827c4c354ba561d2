use {
    crate::{
        config::WorksheetDefaults,
        domain::{
            Breach, BreachVolume, Correlation, Discount, MaFlow, NewsImpact, OppositeIn, Pair,
            Story, SwoopClarity, TradingSession, YesNo,
        },
        models::{
            StoryEntry, StoryRegistry,
            hydrate::{field_or, field_or_any},
            sync::resync,
        },
        utils::{parse_sheet_date, today_local},
    },
    anyhow::{Result, anyhow, bail},
    serde::{Deserialize, Serialize},
    serde_json::Value,
    std::{fmt::Display, str::FromStr},
    strum::IntoEnumIterator,
};

/// Quality of the demand that started the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demand {
    pub breach: Breach,
    pub volume: BreachVolume,
    pub correlation: Correlation,
    pub ma_flow: MaFlow,
    /// Mirror of the story registry entry for the worksheet pair. Read-only to the user.
    pub htf_story: Story,
    /// Informational only; does not score.
    pub caused_by_news: YesNo,
}

impl Demand {
    fn merged_with(self, raw: &Value) -> Self {
        Self {
            breach: field_or(raw, "breach", self.breach),
            volume: field_or(raw, "volume", self.volume),
            correlation: field_or(raw, "correlation", self.correlation),
            ma_flow: field_or(raw, "maFlow", self.ma_flow),
            htf_story: field_or(raw, "htfStory", self.htf_story),
            caused_by_news: field_or(raw, "causedByNews", self.caused_by_news),
        }
    }
}

/// Readiness of the swoop into the demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swoop {
    pub discount: Discount,
    pub opposite_in: OppositeIn,
    #[serde(rename = "swoop", alias = "swoopClarity")]
    pub clarity: SwoopClarity,
    pub correlation: Correlation,
    pub volume: YesNo,
}

impl Swoop {
    fn merged_with(self, raw: &Value) -> Self {
        Self {
            discount: field_or(raw, "discount", self.discount),
            opposite_in: field_or(raw, "oppositeIn", self.opposite_in),
            clarity: field_or_any(raw, &["swoop", "swoopClarity"], self.clarity),
            correlation: field_or(raw, "correlation", self.correlation),
            volume: field_or(raw, "volume", self.volume),
        }
    }
}

/// Free-text fields. Stored flat at the worksheet top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notes {
    pub reminders: String,
    pub quotes: String,
    pub notes: String,
    pub demand_notes: String,
    pub swoop_notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Reminders,
    Quotes,
    General,
    Demand,
    Swoop,
}

impl Notes {
    fn slot_mut(&mut self, field: NoteField) -> &mut String {
        match field {
            NoteField::Reminders => &mut self.reminders,
            NoteField::Quotes => &mut self.quotes,
            NoteField::General => &mut self.notes,
            NoteField::Demand => &mut self.demand_notes,
            NoteField::Swoop => &mut self.swoop_notes,
        }
    }
}

/// The active trade setup being graded: one pair, one date, one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub pair: Pair,
    /// yyyy-mm-dd, or empty
    pub date: String,
    pub session: TradingSession,
    pub news: NewsImpact,
    pub demand: Demand,
    pub swoop: Swoop,
    #[serde(flatten)]
    pub notes: Notes,
    /// Journal endpoint the snapshot is relayed to.
    #[serde(rename = "webhookUrl")]
    pub relay_url: String,
}

impl Worksheet {
    /// Factory-default worksheet, already in sync with `registry`.
    pub fn new(defaults: &WorksheetDefaults, registry: &StoryRegistry) -> Self {
        let sheet = Self {
            pair: defaults.pair,
            date: defaults.date.to_string(),
            session: defaults.session,
            news: defaults.news,
            demand: defaults.demand,
            swoop: defaults.swoop,
            notes: Notes {
                quotes: defaults.quotes.to_string(),
                ..Default::default()
            },
            relay_url: defaults.relay_url.to_string(),
        };
        resync(sheet, registry)
    }

    /// Rebuild from persisted JSON: every field merged over its default (top level first,
    /// then inside `demand`/`swoop`), then resynced. Never fails.
    pub fn hydrate(raw: &Value, defaults: &WorksheetDefaults, registry: &StoryRegistry) -> Self {
        let base = Self::new(defaults, registry);
        let empty = Value::Null;

        let sheet = Self {
            pair: field_or(raw, "pair", base.pair),
            date: Some(field_or(raw, "date", base.date.clone()))
                .filter(|d| d.is_empty() || parse_sheet_date(d).is_some())
                .unwrap_or(base.date),
            session: field_or(raw, "session", base.session),
            news: field_or(raw, "news", base.news),
            demand: base.demand.merged_with(raw.get("demand").unwrap_or(&empty)),
            swoop: base.swoop.merged_with(raw.get("swoop").unwrap_or(&empty)),
            notes: Notes {
                reminders: field_or(raw, "reminders", base.notes.reminders),
                quotes: field_or(raw, "quotes", base.notes.quotes),
                notes: field_or(raw, "notes", base.notes.notes),
                demand_notes: field_or(raw, "demandNotes", base.notes.demand_notes),
                swoop_notes: field_or(raw, "swoopNotes", base.notes.swoop_notes),
            },
            relay_url: field_or(raw, "webhookUrl", base.relay_url),
        };
        resync(sheet, registry)
    }

    /// Returns the worksheet with `update` applied. `self` is left untouched.
    /// The sync rule is re-run afterwards, so a pair change always pulls the new pair's story.
    pub fn apply(&self, update: &WorksheetUpdate, registry: &StoryRegistry) -> Self {
        let mut next = self.clone();
        match update {
            WorksheetUpdate::Pair(pair) => next.pair = *pair,
            WorksheetUpdate::Date(date) => next.date = date.clone(),
            WorksheetUpdate::Session(session) => next.session = *session,
            WorksheetUpdate::News(news) => next.news = *news,

            WorksheetUpdate::Breach(v) => next.demand.breach = *v,
            WorksheetUpdate::DemandVolume(v) => next.demand.volume = *v,
            WorksheetUpdate::DemandCorrelation(v) => next.demand.correlation = *v,
            WorksheetUpdate::MaFlow(v) => next.demand.ma_flow = *v,
            WorksheetUpdate::CausedByNews(v) => next.demand.caused_by_news = *v,

            WorksheetUpdate::Discount(v) => next.swoop.discount = *v,
            WorksheetUpdate::OppositeIn(v) => next.swoop.opposite_in = *v,
            WorksheetUpdate::SwoopClarity(v) => next.swoop.clarity = *v,
            WorksheetUpdate::SwoopCorrelation(v) => next.swoop.correlation = *v,
            WorksheetUpdate::SwoopVolume(v) => next.swoop.volume = *v,

            WorksheetUpdate::Note(field, text) => *next.notes.slot_mut(*field) = text.clone(),
            WorksheetUpdate::RelayUrl(url) => next.relay_url = url.trim().to_string(),
        }
        resync(next, registry)
    }

    /// Registry entry for the worksheet pair (anchor, story, correlation context).
    pub fn story_context<'a>(&self, registry: &'a StoryRegistry) -> &'a StoryEntry {
        registry.get(self.pair)
    }
}

/// One named field edit. `demand.htfStory` is deliberately absent: it only changes via the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorksheetUpdate {
    Pair(Pair),
    Date(String),
    Session(TradingSession),
    News(NewsImpact),
    Breach(Breach),
    DemandVolume(BreachVolume),
    DemandCorrelation(Correlation),
    MaFlow(MaFlow),
    CausedByNews(YesNo),
    Discount(Discount),
    OppositeIn(OppositeIn),
    SwoopClarity(SwoopClarity),
    SwoopCorrelation(Correlation),
    SwoopVolume(YesNo),
    Note(NoteField, String),
    RelayUrl(String),
}

/// Field names accepted by `WorksheetUpdate::parse`, for help text.
pub const EDITABLE_FIELDS: &[&str] = &[
    "pair",
    "date",
    "session",
    "news",
    "demand.breach",
    "demand.volume",
    "demand.correlation",
    "demand.maFlow",
    "demand.causedByNews",
    "swoop.discount",
    "swoop.oppositeIn",
    "swoop.clarity",
    "swoop.correlation",
    "swoop.volume",
    "notes.reminders",
    "notes.quotes",
    "notes.general",
    "notes.demand",
    "notes.swoop",
    "relay.url",
];

fn parse_choice<T>(field: &str, value: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + Display,
{
    T::from_str(value.trim()).map_err(|_| {
        let choices: Vec<String> = T::iter().map(|c| c.to_string()).collect();
        anyhow!(
            "'{}' is not a valid value for {} (expected one of: {})",
            value,
            field,
            choices.join(", ")
        )
    })
}

/// Empty (no date), `today`, or yyyy-mm-dd. Anything else would corrupt the export row.
fn parse_date(field: &str, value: &str) -> Result<String> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(String::new());
    }
    if v.eq_ignore_ascii_case("today") {
        return Ok(today_local());
    }
    parse_sheet_date(v).ok_or_else(|| {
        anyhow!(
            "'{}' is not a valid value for {} (expected yyyy-mm-dd, 'today' or empty)",
            value,
            field
        )
    })
}

impl WorksheetUpdate {
    /// Build an update from a field path and raw text, e.g. `("demand.breach", "strong")`.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let key = field.trim().to_ascii_lowercase();
        let update = match key.as_str() {
            "pair" => Self::Pair(parse_choice(field, value)?),
            "date" => Self::Date(parse_date(field, value)?),
            "session" => Self::Session(parse_choice(field, value)?),
            "news" => Self::News(parse_choice(field, value)?),

            "demand.breach" => Self::Breach(parse_choice(field, value)?),
            "demand.volume" => Self::DemandVolume(parse_choice(field, value)?),
            "demand.correlation" | "demand.corr" => {
                Self::DemandCorrelation(parse_choice(field, value)?)
            }
            "demand.maflow" | "demand.ma" => Self::MaFlow(parse_choice(field, value)?),
            "demand.causedbynews" | "demand.news" => {
                Self::CausedByNews(parse_choice(field, value)?)
            }
            "demand.htfstory" | "demand.htf" => bail!(
                "{} is read-only: it follows the HTF story book. Edit it with the `story` command",
                field
            ),

            "swoop.discount" => Self::Discount(parse_choice(field, value)?),
            "swoop.oppositein" | "swoop.opposite" => Self::OppositeIn(parse_choice(field, value)?),
            "swoop.clarity" | "swoop.swoop" => Self::SwoopClarity(parse_choice(field, value)?),
            "swoop.correlation" | "swoop.corr" => {
                Self::SwoopCorrelation(parse_choice(field, value)?)
            }
            "swoop.volume" => Self::SwoopVolume(parse_choice(field, value)?),

            "notes.reminders" | "reminders" => Self::Note(NoteField::Reminders, value.to_string()),
            "notes.quotes" | "quotes" => Self::Note(NoteField::Quotes, value.to_string()),
            "notes.general" | "notes" => Self::Note(NoteField::General, value.to_string()),
            "notes.demand" | "demandnotes" => Self::Note(NoteField::Demand, value.to_string()),
            "notes.swoop" | "swoopnotes" => Self::Note(NoteField::Swoop, value.to_string()),

            "relay.url" | "webhookurl" => Self::RelayUrl(value.to_string()),

            _ => bail!(
                "unknown field '{}' (editable fields: {})",
                field,
                EDITABLE_FIELDS.join(", ")
            ),
        };
        Ok(update)
    }

}
