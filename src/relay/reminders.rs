//! Scheduled reminder relay: journal -> chat bot.
//!
//! One invocation polls the journal once, pushes each due reminder to its chat, and marks
//! delivered ones as sent. A failed delivery is skipped (no retry in the same run).

use {
    crate::{
        config::{RELAY, RelayClientConfig},
        data::{HttpJournal, JournalBackend, Messenger, TelegramBot},
    },
    anyhow::{Result, bail},
    serde::Serialize,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Credentials and endpoint the relay cannot run without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayEnv {
    pub journal_url: String,
    pub bot_token: String,
}

impl RelayEnv {
    /// Build from a key lookup. Missing or blank values are a hard failure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        match (read(RELAY.env.journal_url), read(RELAY.env.bot_token)) {
            (Some(journal_url), Some(bot_token)) => Ok(Self {
                journal_url,
                bot_token,
            }),
            _ => bail!("Missing env vars"),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Machine-readable result of one invocation: `{ok, sent}` or `{ok, error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayOutcome {
    pub fn sent(count: usize) -> Self {
        Self {
            ok: true,
            sent: Some(count),
            error: None,
        }
    }

    pub fn failed(err: &anyhow::Error) -> Self {
        Self {
            ok: false,
            sent: None,
            error: Some(err.to_string()),
        }
    }
}

/// Deliver every due reminder. Returns the number of confirmed deliveries.
///
/// Poll failure aborts the whole run. Per-reminder delivery failure does not.
pub async fn dispatch_due_reminders<J, M>(journal: &J, messenger: &M) -> Result<usize>
where
    J: JournalBackend + ?Sized,
    M: Messenger + ?Sized,
{
    let due = journal.poll_due().await?;
    let mut sent = 0;

    for reminder in &due {
        let Some(chat_id) = reminder.recipient() else {
            log::warn!("Skipping due reminder {} with no chat id", reminder.row);
            continue;
        };
        let text = reminder.message_or(RELAY.messenger.fallback_text);

        if let Err(e) = messenger.send_text(chat_id, &text).await {
            log::warn!("Reminder {} not delivered: {:#}", reminder.row, e);
            continue;
        }
        sent += 1;

        #[cfg(debug_assertions)]
        if DF.log_relay {
            log::info!("Reminder {} delivered to {}", reminder.row, chat_id);
        }

        // Delivered either way; a failed mark only means the journal may send it again later.
        if let Err(e) = journal.mark_sent(reminder).await {
            log::warn!("Reminder {} delivered but not marked sent: {:#}", reminder.row, e);
        }
    }

    Ok(sent)
}

/// Full invocation against the real journal and bot, configured from `env`.
pub async fn run_reminder_relay(env: &RelayEnv) -> Result<usize> {
    let config = RelayClientConfig::default();
    let journal = HttpJournal::new(&env.journal_url, &config)?;
    let bot = TelegramBot::new(&env.bot_token, &config)?;
    dispatch_due_reminders(&journal, &bot).await
}
