//! Todo List With Deadlines
//!
//! Builds a small todo list against a fixed clock, walks through each
//! filter, and then lets time pass to show items changing urgency.
//!
//! Run with: cargo run --example todo_deadlines
//! Set RUST_LOG=uikata=debug to see the store's own log lines.

use chrono::{Duration, TimeZone, Utc};
use tracing::{info, warn};
use uikata::clock::{Clock, FixedClock};
use uikata::config::Settings;
use uikata::todo::{DeadlineInput, Filter, TodoDraft, TodoStore};

const SETTINGS: &str = r#"
[todo]
due_soon_hours = 24
default_hour = 18
"#;

fn show<C: Clock>(store: &mut TodoStore<C>) {
    let counts = store.counts();
    for filter in Filter::ALL {
        store.set_filter(filter);
        println!("[{filter}] ({})", counts.get(filter));
        for item in store.visible_items() {
            let badge = match store.urgency(item) {
                Some(urgency) => format!("{urgency} {}", urgency.color_hex()),
                None => "done".to_string(),
            };
            println!("    {:<24} {}  {badge}", item.text(), item.deadline().format("%Y-%m-%d %H:%M"));
        }
    }
    store.set_filter(Filter::All);
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = match Settings::from_toml_str(SETTINGS) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(%err, "Falling back to default settings");
            Settings::default()
        }
    };

    let now = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).single().unwrap_or_else(Utc::now);
    let clock = FixedClock::new(now);
    let mut store = TodoStore::from_settings(&settings.todo, clock.clone());
    info!(%now, "Starting todo demo");

    let form = DeadlineInput::from_settings(2025, &settings.todo);
    let drafts = [
        TodoDraft::new("renew passport", form.with_date(1, 6, 2025)),
        TodoDraft::new("water the plants", form.with_date(2, 6, 2025)),
        TodoDraft::new("book summer trip", form.with_date(20, 6, 2025).with_time_text("9", "3o")),
        TodoDraft::new("   ", form.with_date(3, 6, 2025)),
        TodoDraft::new("plan 31 June party", form.with_date(31, 6, 2025)),
    ];

    let mut ids = Vec::new();
    for draft in &drafts {
        match store.add_draft(draft) {
            Ok(id) => ids.push(id),
            Err(err) => {
                println!("Rejected {:?}: {err}", draft.text);
                for problem in err.problems() {
                    println!("    - {problem}");
                }
            }
        }
    }
    println!();
    show(&mut store);

    if let Some(&first) = ids.first() {
        println!("Completing the first item:");
        store.toggle_complete(first);
        show(&mut store);
    }

    println!("Two days later:");
    clock.advance(Duration::days(2));
    show(&mut store);

    info!(items = store.len(), "Demo finished");
}
