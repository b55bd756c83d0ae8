//! End-to-end flows through the public API, the way a presentation layer
//! drives it.

use chrono::{Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uikata::checkpoint::{Checkpoint, CheckpointError};
use uikata::clock::FixedClock;
use uikata::config::Settings;
use uikata::counter::{ClickCounter, Language};
use uikata::game::{Board, Cell, GameRecord, GameStatus, GameTracker, HistoryEntry, Mark, PlayResult, Rejection};
use uikata::todo::{DeadlineInput, Filter, TodoDraft, TodoError, TodoRecord, TodoStore, Urgency};

#[test]
fn game_time_travel_discards_redo_branch() {
    let mut game = GameTracker::new();
    game.play(0);
    game.play(4);
    game.play(8);

    // First branch from move 1.
    assert!(game.jump_to(1));
    assert!(game.play(2).is_placed());
    let first_branch = game.history().to_vec();
    assert_eq!(first_branch.len(), 3);

    // Second branch from the same point replaces it.
    assert!(game.jump_to(1));
    assert!(game.play(6).is_placed());
    assert_eq!(game.history().len(), 3);
    assert_ne!(game.history(), first_branch.as_slice());
    assert_eq!(game.current_board().cell(2), Some(Cell::Empty));
    assert_eq!(game.current_board().cell(6), Some(Cell::O));
}

#[test]
fn game_status_line_through_a_full_game() {
    let mut game = GameTracker::new();
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });

    for cell in [0, 1, 4, 2] {
        game.play(cell);
    }
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });

    game.play(8);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.play(3), PlayResult::Rejected(Rejection::GameOver));

    // Looking back at an unfinished position reopens it for play.
    game.jump_to(2);
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });
    let entries: Vec<HistoryEntry> = game.entries().collect();
    assert_eq!(entries.len(), 6);
}

#[test]
fn game_checkpoint_survives_json_and_bytes() {
    let mut game = GameTracker::new();
    for cell in [4, 0, 8] {
        game.play(cell);
    }
    game.jump_to(1);

    let json = game.checkpoint().to_json().unwrap();
    let from_json = GameTracker::restore(Checkpoint::from_json(&json).unwrap()).unwrap();
    assert_eq!(from_json.history(), game.history());
    assert_eq!(from_json.cursor(), 1);

    let bytes = game.checkpoint().to_bytes().unwrap();
    let from_bytes = GameTracker::restore(Checkpoint::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(from_bytes.next_mark(), Mark::O);
}

/// Same wire shape as `GameRecord`, but with fields a caller can corrupt.
#[derive(Serialize, Deserialize)]
struct LooseTimeline {
    snapshots: Vec<Board>,
    cursor: usize,
}

#[derive(Serialize, Deserialize)]
struct LooseGameRecord {
    timeline: LooseTimeline,
    first_mark: Mark,
}

fn loose_checkpoint(snapshots: Vec<Board>, cursor: usize) -> Checkpoint<LooseGameRecord> {
    Checkpoint::new(LooseGameRecord {
        timeline: LooseTimeline { snapshots, cursor },
        first_mark: Mark::X,
    })
}

#[test]
fn game_checkpoint_with_cursor_past_history_is_rejected() {
    let mut game = GameTracker::new();
    game.play(4);

    let json = game
        .checkpoint()
        .to_json()
        .unwrap()
        .replace("\"cursor\":1", "\"cursor\":7");
    assert!(json.contains("\"cursor\":7"));
    assert!(matches!(
        Checkpoint::<GameRecord>::from_json(&json),
        Err(CheckpointError::DeserializationFailed(_))
    ));

    let history = game.history().to_vec();
    let len = history.len();
    let bytes = loose_checkpoint(history, len).to_bytes().unwrap();
    assert!(matches!(
        Checkpoint::<GameRecord>::from_bytes(&bytes),
        Err(CheckpointError::DeserializationFailed(_))
    ));
}

#[test]
fn game_checkpoint_with_marked_first_board_is_rejected() {
    let marked = Board::new().place(0, Mark::X).unwrap();
    let loose = loose_checkpoint(vec![marked], 0);

    let json = loose.to_json().unwrap();
    let from_json = Checkpoint::<GameRecord>::from_json(&json).unwrap();
    assert!(matches!(
        GameTracker::restore(from_json),
        Err(CheckpointError::ValidationFailed(_))
    ));

    let bytes = loose.to_bytes().unwrap();
    let from_bytes = Checkpoint::<GameRecord>::from_bytes(&bytes).unwrap();
    assert!(matches!(
        GameTracker::restore(from_bytes),
        Err(CheckpointError::ValidationFailed(_))
    ));
}

#[test]
fn game_checkpoint_with_rewritten_cell_is_rejected() {
    let x_at_0 = Board::new().place(0, Mark::X).unwrap();
    let mut cells = *x_at_0.cells();
    cells[0] = Cell::O;
    cells[1] = Cell::X;

    let loose = loose_checkpoint(vec![Board::new(), x_at_0, Board::from_cells(cells)], 2);
    let json = loose.to_json().unwrap();
    assert!(matches!(
        GameTracker::restore(Checkpoint::from_json(&json).unwrap()),
        Err(CheckpointError::ValidationFailed(_))
    ));
}

#[test]
fn todo_add_filter_and_complete() {
    let now = Utc.with_ymd_and_hms(2025, 3, 3, 15, 0, 0).unwrap();
    let clock = FixedClock::new(now);
    let mut store = TodoStore::with_clock(clock.clone());

    assert_eq!(store.add("", now), Err(TodoError::EmptyText));
    assert_eq!(store.add("  ", now), Err(TodoError::EmptyText));
    assert!(store.is_empty());

    let soon = store.add("prepare slides", now + Duration::hours(2)).unwrap();
    let late = store.add("send invoice", now - Duration::hours(1)).unwrap();

    assert_eq!(store.urgency(store.get(soon).unwrap()), Some(Urgency::DueSoon));
    assert_eq!(store.urgency(store.get(late).unwrap()), Some(Urgency::Overdue));

    store.set_filter(Filter::Overdue);
    let overdue: Vec<_> = store.visible_items().iter().map(|i| i.id()).collect();
    assert_eq!(overdue, vec![late]);

    store.toggle_complete(late);
    assert!(store.visible_items().is_empty());
    assert_eq!(
        store.get(late).unwrap().completed_at(),
        Some(now),
        "completion is stamped from the injected clock"
    );

    store.set_filter(Filter::Completed);
    let completed: Vec<_> = store.visible_items().iter().map(|i| i.id()).collect();
    assert_eq!(completed, vec![late]);
}

#[test]
fn todo_form_flow_with_settings() {
    let settings = Settings::from_toml_str(
        r#"
        [todo]
        due_soon_hours = 72
        default_hour = 9
        default_minute = 30
        "#,
    )
    .unwrap();

    let now = Utc.with_ymd_and_hms(2024, 12, 30, 9, 0, 0).unwrap();
    let mut store = TodoStore::from_settings(&settings.todo, FixedClock::new(now));

    let form = DeadlineInput::from_settings(2025, &settings.todo);
    assert_eq!((form.day, form.month, form.hours, form.minutes), (1, 1, 9, 30));

    let id = store
        .add_draft(&TodoDraft::new("new year plan", form.with_time_text("2x3", "")))
        .unwrap();
    let item = store.get(id).unwrap();
    assert_eq!(item.deadline(), Utc.with_ymd_and_hms(2025, 1, 1, 23, 0, 0).unwrap());
    assert_eq!(store.urgency(item), Some(Urgency::DueSoon));

    let bad = TodoDraft::new("", form.with_date(30, 2, 2025));
    match store.add_draft(&bad) {
        Err(TodoError::Invalid(problems)) => assert_eq!(problems.len(), 2),
        other => panic!("expected invalid draft, got {other:?}"),
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn todo_checkpoint_roundtrip_and_version_guard() {
    let now = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 0).unwrap();
    let clock = FixedClock::new(now);
    let mut store = TodoStore::with_clock(clock.clone());
    let id = store.add("back up photos", now + Duration::days(2)).unwrap();
    store.toggle_complete(id);
    store.set_filter(Filter::Active);

    let checkpoint = store.checkpoint();
    assert_eq!(checkpoint.timestamp, now);

    let json = checkpoint.to_json().unwrap();
    let restored = TodoStore::restore(
        Checkpoint::from_json(&json).unwrap(),
        &Settings::default().todo,
        clock.clone(),
    )
    .unwrap();
    assert_eq!(restored.items(), store.items());
    assert_eq!(restored.filter(), Filter::Active);

    let mut stale: Checkpoint<TodoRecord> = store.checkpoint();
    stale.version += 1;
    let result = TodoStore::restore(stale, &Settings::default().todo, clock);
    assert!(matches!(result, Err(CheckpointError::UnsupportedVersion { .. })));
}

#[test]
fn counter_flow() {
    let mut counter = ClickCounter::new();
    for _ in 0..5 {
        counter.increment();
    }
    counter.set_language("ru".parse::<Language>().unwrap());
    assert_eq!(counter.count(), 5);
    assert_eq!(counter.language(), Language::Ru);

    counter.reset();
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.language(), Language::Ru);
}
