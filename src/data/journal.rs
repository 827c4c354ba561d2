// Spreadsheet-backed trade journal reached over a single web-app endpoint.

use {
    crate::{
        config::{RELAY, RelayClientConfig},
        data::Snapshot,
    },
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
    std::{borrow::Cow, time::Duration},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// A reminder the journal says is due now.
///
/// `row` and `frequency_minutes` are opaque to us and handed back to the journal unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DueReminder {
    #[serde(default)]
    pub row: Value,
    #[serde(default)]
    pub chat_id: Value,
    /// Free cell content: usually text, sometimes a bare number.
    #[serde(default)]
    pub reminder_message: Value,
    #[serde(default)]
    pub frequency_minutes: Value,
}

impl DueReminder {
    /// Chat to deliver to. None when the id is absent, null, empty or zero.
    pub fn recipient(&self) -> Option<&Value> {
        let present = match &self.chat_id {
            Value::String(s) => !s.trim().is_empty(),
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => false,
        };
        present.then_some(&self.chat_id)
    }

    /// Message text; `fallback` when the cell is empty, zero, or not text/number.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> Cow<'a, str> {
        match &self.reminder_message {
            Value::String(s) if !s.is_empty() => Cow::Borrowed(s.as_str()),
            Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Cow::Owned(n.to_string()),
            _ => Cow::Borrowed(fallback),
        }
    }

    /// `mark_sent` payload. Null fields are left out rather than sent as `null`.
    fn mark_sent_body(&self) -> Value {
        let mut body = Map::new();
        if !self.row.is_null() {
            body.insert("row".into(), self.row.clone());
        }
        if !self.frequency_minutes.is_null() {
            body.insert("frequency_minutes".into(), self.frequency_minutes.clone());
        }
        Value::Object(body)
    }
}

#[derive(Debug, Deserialize)]
struct PollResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    due: Option<Vec<Value>>,
}

/// Keep every well-formed record. A malformed one is logged and dropped, never fatal.
fn parse_due(entries: Vec<Value>) -> Vec<DueReminder> {
    entries
        .into_iter()
        .filter_map(|entry| match DueReminder::deserialize(&entry) {
            Ok(reminder) => Some(reminder),
            Err(e) => {
                log::warn!("Skipping malformed due record {}: {}", entry, e);
                None
            }
        })
        .collect()
}

/// Journal operations used by the reminder relay.
#[async_trait]
pub trait JournalBackend: Send + Sync {
    /// Reminders due for delivery. Fails if the journal does not answer `ok: true`.
    async fn poll_due(&self) -> Result<Vec<DueReminder>>;
    /// Tell the journal a reminder went out so it can schedule the next one.
    async fn mark_sent(&self, reminder: &DueReminder) -> Result<()>;
}

pub struct HttpJournal {
    client: reqwest::Client,
    url: String,
}

impl HttpJournal {
    pub fn new(url: &str, config: &RelayClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("Failed to build journal HTTP client")?;
        Ok(Self {
            client,
            url: url.trim().to_string(),
        })
    }

    /// POST the snapshot as a plain body. Only the status is checked; the body is not read.
    pub async fn post_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let body = serde_json::to_string(snapshot)?;

        #[cfg(debug_assertions)]
        if DF.log_relay {
            log::info!("Relaying {} snapshot ({} bytes)", snapshot.pair, body.len());
        }

        let res = self
            .client
            .post(&self.url)
            .body(body)
            .send()
            .await
            .context("Journal request failed")?;

        if !res.status().is_success() {
            bail!("HTTP {}", res.status().as_u16());
        }
        Ok(())
    }
}

#[async_trait]
impl JournalBackend for HttpJournal {
    async fn poll_due(&self) -> Result<Vec<DueReminder>> {
        let res = self
            .client
            .get(&self.url)
            .query(&[("mode", RELAY.journal.poll_due)])
            .send()
            .await
            .context("Journal poll request failed")?;

        let parsed: PollResponse = res
            .json()
            .await
            .context("Journal poll returned an unreadable body")?;

        if !parsed.ok {
            bail!("Poll failed");
        }
        let due = parse_due(parsed.due.unwrap_or_default());

        #[cfg(debug_assertions)]
        if DF.log_relay {
            log::info!("Journal reports {} due reminder(s)", due.len());
        }
        Ok(due)
    }

    async fn mark_sent(&self, reminder: &DueReminder) -> Result<()> {
        let res = self
            .client
            .post(&self.url)
            .query(&[("mode", RELAY.journal.mark_sent)])
            .json(&reminder.mark_sent_body())
            .send()
            .await
            .context("Journal mark_sent request failed")?;

        if !res.status().is_success() {
            bail!("mark_sent: HTTP {}", res.status().as_u16());
        }
        Ok(())
    }
}
