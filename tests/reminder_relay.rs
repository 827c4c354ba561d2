use {
    anyhow::{Result, bail},
    async_trait::async_trait,
    serde_json::{Value, json},
    setup_grader::{
        data::{DueReminder, JournalBackend, Messenger},
        relay::dispatch_due_reminders,
    },
    std::sync::Mutex,
};

#[derive(Default)]
struct FakeJournal {
    due: Vec<DueReminder>,
    poll_fails: bool,
    mark_fails: bool,
    marked: Mutex<Vec<(Value, Value)>>,
}

#[async_trait]
impl JournalBackend for FakeJournal {
    async fn poll_due(&self) -> Result<Vec<DueReminder>> {
        if self.poll_fails {
            bail!("Poll failed");
        }
        Ok(self.due.clone())
    }

    async fn mark_sent(&self, reminder: &DueReminder) -> Result<()> {
        self.marked
            .lock()
            .unwrap()
            .push((reminder.row.clone(), reminder.frequency_minutes.clone()));
        if self.mark_fails {
            bail!("mark_sent: HTTP 500");
        }
        Ok(())
    }
}

/// Records deliveries; refuses any chat id listed in `reject`.
#[derive(Default)]
struct FakeBot {
    reject: Vec<Value>,
    sent: Mutex<Vec<(Value, String)>>,
}

#[async_trait]
impl Messenger for FakeBot {
    async fn send_text(&self, chat_id: &Value, text: &str) -> Result<()> {
        if self.reject.contains(chat_id) {
            bail!("sendMessage: HTTP 403");
        }
        self.sent
            .lock()
            .unwrap()
            .push((chat_id.clone(), text.to_string()));
        Ok(())
    }
}

fn reminder(row: u32, chat_id: Value, message: Option<&str>) -> DueReminder {
    DueReminder {
        row: json!(row),
        chat_id,
        reminder_message: message.map_or(Value::Null, |m| json!(m)),
        frequency_minutes: json!(60),
    }
}

#[tokio::test]
async fn test_delivers_and_marks_each_due_reminder() {
    let journal = FakeJournal {
        due: vec![
            reminder(4, json!(111), Some("Move stop to BE")),
            reminder(9, json!("-100222"), None),
        ],
        ..Default::default()
    };
    let bot = FakeBot::default();

    let sent = dispatch_due_reminders(&journal, &bot).await.unwrap();
    assert_eq!(sent, 2);

    let delivered = bot.sent.lock().unwrap().clone();
    assert_eq!(delivered[0], (json!(111), "Move stop to BE".to_string()));
    assert_eq!(
        delivered[1],
        (json!("-100222"), "BOOK BOOK BOOK. Respect risk.".to_string())
    );

    let marked = journal.marked.lock().unwrap().clone();
    assert_eq!(marked, vec![(json!(4), json!(60)), (json!(9), json!(60))]);
}

#[tokio::test]
async fn test_skips_reminders_without_recipient() {
    let journal = FakeJournal {
        due: vec![
            reminder(1, json!(""), Some("nobody")),
            reminder(2, Value::Null, Some("nobody")),
            reminder(3, json!(0), Some("nobody")),
            reminder(5, json!(555), Some("somebody")),
        ],
        ..Default::default()
    };
    let bot = FakeBot::default();

    assert_eq!(dispatch_due_reminders(&journal, &bot).await.unwrap(), 1);
    assert_eq!(bot.sent.lock().unwrap().len(), 1);
    assert_eq!(journal.marked.lock().unwrap().clone(), vec![(json!(5), json!(60))]);
}

#[tokio::test]
async fn test_failed_delivery_is_neither_counted_nor_marked() {
    let journal = FakeJournal {
        due: vec![reminder(1, json!(111), None), reminder(2, json!(222), None)],
        ..Default::default()
    };
    let bot = FakeBot {
        reject: vec![json!(111)],
        ..Default::default()
    };

    assert_eq!(dispatch_due_reminders(&journal, &bot).await.unwrap(), 1);
    assert_eq!(journal.marked.lock().unwrap().clone(), vec![(json!(2), json!(60))]);
}

#[tokio::test]
async fn test_mark_failure_does_not_abort_the_run() {
    let journal = FakeJournal {
        due: vec![reminder(1, json!(111), None), reminder(2, json!(222), None)],
        mark_fails: true,
        ..Default::default()
    };
    let bot = FakeBot::default();

    assert_eq!(dispatch_due_reminders(&journal, &bot).await.unwrap(), 2);
    assert_eq!(journal.marked.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_poll_failure_aborts_before_sending() {
    let journal = FakeJournal {
        due: vec![reminder(1, json!(111), None)],
        poll_fails: true,
        ..Default::default()
    };
    let bot = FakeBot::default();

    let err = dispatch_due_reminders(&journal, &bot).await.unwrap_err();
    assert_eq!(err.to_string(), "Poll failed");
    assert!(bot.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_nothing_due() {
    let journal = FakeJournal::default();
    let bot = FakeBot::default();
    assert_eq!(dispatch_due_reminders(&journal, &bot).await.unwrap(), 0);
}

#[tokio::test]
async fn test_numeric_message_is_sent_alongside_text_ones() {
    let mut numeric = reminder(2, json!(222), None);
    numeric.reminder_message = json!(100);
    let journal = FakeJournal {
        due: vec![reminder(1, json!(111), Some("check")), numeric],
        ..Default::default()
    };
    let bot = FakeBot::default();

    assert_eq!(dispatch_due_reminders(&journal, &bot).await.unwrap(), 2);
    let delivered = bot.sent.lock().unwrap().clone();
    assert_eq!(delivered[0], (json!(111), "check".to_string()));
    assert_eq!(delivered[1], (json!(222), "100".to_string()));
}
