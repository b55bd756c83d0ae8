//! Property-based tests for the exercise cores.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use uikata::clock::FixedClock;
use uikata::core::Timeline;
use uikata::game::{Board, Cell, GameTracker, Mark, PlayResult, WINNING_LINES};
use uikata::todo::{classify, Filter, TodoStore, Urgency};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
}

prop_compose! {
    fn arbitrary_cell()(variant in 0..3u8) -> Cell {
        match variant {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        }
    }
}

prop_compose! {
    fn arbitrary_board()(cells in prop::array::uniform9(arbitrary_cell())) -> Board {
        Board::from_cells(cells)
    }
}

/// Sequence of play requests; some will be rejected.
fn arbitrary_moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..10usize, 0..20)
}

/// Deadline offsets from `now`, in seconds, spanning a few days either way.
fn arbitrary_offset() -> impl Strategy<Value = i64> {
    -3 * 86_400i64..3 * 86_400i64
}

fn uniform_line(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|line| {
        let mark = cells[line[0]].mark()?;
        line.iter()
            .all(|&i| cells[i] == mark.to_cell())
            .then_some(mark)
    })
}

proptest! {
    #[test]
    fn winner_matches_uniform_line(board in arbitrary_board()) {
        prop_assert_eq!(board.winner(), uniform_line(&board));
    }

    #[test]
    fn draw_means_full_without_winner(board in arbitrary_board()) {
        let full = board.cells().iter().all(|c| *c != Cell::Empty);
        prop_assert_eq!(board.is_draw(), full && board.winner().is_none());
    }

    #[test]
    fn rejected_play_changes_nothing(moves in arbitrary_moves(), probe in 0..10usize) {
        let mut game = GameTracker::new();
        for cell in moves {
            game.play(cell);
        }

        let history = game.history().to_vec();
        let cursor = game.cursor();
        if let PlayResult::Rejected(_) = game.play(probe) {
            prop_assert_eq!(game.history(), history.as_slice());
            prop_assert_eq!(game.cursor(), cursor);
        }
    }

    #[test]
    fn accepted_play_truncates_then_appends(
        moves in arbitrary_moves(),
        jump in 0..20usize,
        probe in 0..9usize,
    ) {
        let mut game = GameTracker::new();
        for cell in moves {
            game.play(cell);
        }
        game.jump_to(jump);

        let c = game.cursor();
        let kept = game.history()[..=c].to_vec();
        if game.play(probe).is_placed() {
            prop_assert_eq!(game.history().len(), c + 2);
            prop_assert_eq!(game.cursor(), c + 1);
            prop_assert_eq!(&game.history()[..=c], kept.as_slice());
        }
    }

    #[test]
    fn next_mark_follows_cursor_parity(moves in arbitrary_moves(), jump in 0..20usize) {
        let mut game = GameTracker::new();
        for cell in moves {
            game.play(cell);
        }
        game.jump_to(jump);

        let expected = if game.cursor() % 2 == 0 { Mark::X } else { Mark::O };
        prop_assert_eq!(game.next_mark(), expected);
    }

    #[test]
    fn cursor_always_resolves(moves in arbitrary_moves(), jumps in prop::collection::vec(0..25usize, 0..5)) {
        let mut game = GameTracker::new();
        for (cell, jump) in moves.iter().zip(jumps.iter().cycle()) {
            game.play(*cell);
            game.jump_to(*jump);
        }
        prop_assert!(game.cursor() < game.history().len());
        prop_assert_eq!(game.history()[0], Board::new());
    }

    #[test]
    fn timeline_record_is_pure(count in 1..10usize) {
        let mut timeline = Timeline::new(Board::new());
        for i in 0..count {
            let before = timeline.snapshot_count();
            let next = Board::new().place(i % 9, Mark::X).unwrap_or_default();
            let recorded = timeline.record(next);
            prop_assert_eq!(timeline.snapshot_count(), before);
            prop_assert_eq!(recorded.snapshot_count(), before + 1);
            timeline = recorded;
        }
    }

    #[test]
    fn urgency_agrees_with_deadline_filters(offset in arbitrary_offset()) {
        let now = base_time();
        let mut store = TodoStore::with_clock(FixedClock::new(now));
        let id = store.add("probe", now + Duration::seconds(offset)).unwrap();

        let urgency = store.urgency(store.get(id).unwrap());
        prop_assert!(urgency.is_some());

        for filter in [Filter::Overdue, Filter::DueSoon, Filter::Safe] {
            store.set_filter(filter);
            let shown = !store.visible_items_at(now).is_empty();
            prop_assert_eq!(shown, filter.urgency() == urgency);
        }
    }

    #[test]
    fn classify_thresholds(offset in arbitrary_offset()) {
        let now = base_time();
        let window = Duration::hours(24);
        let expected = if offset < 0 {
            Urgency::Overdue
        } else if offset <= 86_400 {
            Urgency::DueSoon
        } else {
            Urgency::Safe
        };
        prop_assert_eq!(classify(now + Duration::seconds(offset), now, window), expected);
    }

    #[test]
    fn visible_items_is_stable_without_mutation(
        offsets in prop::collection::vec(arbitrary_offset(), 0..12),
        filter_index in 0..6usize,
    ) {
        let now = base_time();
        let mut store = TodoStore::with_clock(FixedClock::new(now));
        for (i, offset) in offsets.iter().enumerate() {
            let id = store.add(&format!("task {i}"), now + Duration::seconds(*offset)).unwrap();
            if i % 3 == 0 {
                store.toggle_complete(id);
            }
        }
        store.set_filter(Filter::ALL[filter_index]);

        let first: Vec<_> = store.visible_items().iter().map(|item| item.id()).collect();
        let second: Vec<_> = store.visible_items().iter().map(|item| item.id()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn visible_items_keep_insertion_order(offsets in prop::collection::vec(arbitrary_offset(), 0..12)) {
        let now = base_time();
        let mut store = TodoStore::with_clock(FixedClock::new(now));
        let ids: Vec<_> = offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| store.add(&format!("task {i}"), now + Duration::seconds(*offset)).unwrap())
            .collect();

        for filter in Filter::ALL {
            store.set_filter(filter);
            let visible: Vec<_> = store.visible_items().iter().map(|item| item.id()).collect();
            let expected: Vec<_> = ids.iter().copied().filter(|id| visible.contains(id)).collect();
            prop_assert_eq!(visible, expected);
        }
    }

    #[test]
    fn blank_text_never_changes_store(spaces in "[ \t\n]{0,8}") {
        let mut store = TodoStore::with_clock(FixedClock::new(base_time()));
        prop_assert!(store.add(&spaces, base_time()).is_err());
        prop_assert!(store.is_empty());
    }
}
