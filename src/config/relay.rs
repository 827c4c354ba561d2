pub struct RelayClientConfig {
    pub timeout_ms: u64,
}

impl Default for RelayClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: RELAY.client.timeout_ms,
        }
    }
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// Query-string `mode` values understood by the journal backend.
pub struct JournalModes {
    pub poll_due: &'static str,
    pub mark_sent: &'static str,
}

pub struct MessengerConfig {
    pub api_base: &'static str,
    /// Sent when a due record carries no message of its own.
    pub fallback_text: &'static str,
}

/// Environment variable names read by the reminder relay.
pub struct RelayEnvKeys {
    pub journal_url: &'static str,
    pub bot_token: &'static str,
}

pub struct RelayConfig {
    pub client: ClientDefaults,
    pub journal: JournalModes,
    pub messenger: MessengerConfig,
    pub env: RelayEnvKeys,
}

pub const RELAY: RelayConfig = RelayConfig {
    client: ClientDefaults { timeout_ms: 15_000 },
    journal: JournalModes {
        poll_due: "poll_open_trades",
        mark_sent: "mark_sent",
    },
    messenger: MessengerConfig {
        api_base: "https://api.telegram.org",
        fallback_text: "BOOK BOOK BOOK. Respect risk.",
    },
    env: RelayEnvKeys {
        journal_url: "APPS_SCRIPT_URL",
        bot_token: "TELEGRAM_BOT_TOKEN",
    },
};
