mod common;

use common::make_campaigns;
use pledgeboard::ui::mvi::Reducer;
use pledgeboard::ui::table::{LoadState, RenderState, TableIntent, TableReducer, TableState};

fn loaded(count: usize) -> TableState {
    TableReducer::reduce(
        TableState::default(),
        TableIntent::Loaded {
            campaigns: make_campaigns(count),
        },
    )
}

#[test]
fn starts_pending_on_page_one() {
    let state = TableState::default();
    assert_eq!(state.load, LoadState::Pending);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.render_state(), RenderState::Loading);
}

#[test]
fn load_success_shows_first_page() {
    let state = loaded(12);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages(), 3);
    match state.render_state() {
        RenderState::Table {
            rows,
            current_page,
            total_pages,
        } => {
            assert_eq!(current_page, 1);
            assert_eq!(total_pages, 3);
            let serials: Vec<u32> = rows.iter().map(|c| c.serial_no).collect();
            assert_eq!(serials, vec![1, 2, 3, 4, 5]);
        }
        other => panic!("expected Table, got {:?}", other),
    }
}

#[test]
fn load_failure_shows_reason() {
    let state = TableReducer::reduce(
        TableState::default(),
        TableIntent::Failed {
            reason: "source returned HTTP 500".into(),
        },
    );
    assert_eq!(state.render_state(), RenderState::Error("source returned HTTP 500"));
}

#[test]
fn empty_dataset_shows_no_data() {
    let state = loaded(0);
    assert_eq!(state.render_state(), RenderState::NoData);
    assert_eq!(state.total_pages(), 0);
}

#[test]
fn load_outcome_is_final() {
    // A second completion belongs to an abandoned fetch and is dropped.
    let state = loaded(12);
    let state = TableReducer::reduce(
        state,
        TableIntent::Failed {
            reason: "late failure".into(),
        },
    );
    assert!(matches!(state.load, LoadState::Loaded(_)));

    let failed = TableReducer::reduce(
        TableState::default(),
        TableIntent::Failed {
            reason: "first".into(),
        },
    );
    let failed = TableReducer::reduce(
        failed,
        TableIntent::Loaded {
            campaigns: make_campaigns(3),
        },
    );
    assert_eq!(failed.load, LoadState::Failed("first".into()));
}

#[test]
fn twelve_records_paginate_into_three_pages() {
    let state = TableReducer::reduce(loaded(12), TableIntent::GoTo { page: 2 });
    match state.render_state() {
        RenderState::Table { rows, .. } => {
            let serials: Vec<u32> = rows.iter().map(|c| c.serial_no).collect();
            assert_eq!(serials, vec![6, 7, 8, 9, 10]);
        }
        other => panic!("expected Table, got {:?}", other),
    }

    let state = TableReducer::reduce(state, TableIntent::NextPage);
    match state.render_state() {
        RenderState::Table { rows, .. } => {
            let serials: Vec<u32> = rows.iter().map(|c| c.serial_no).collect();
            assert_eq!(serials, vec![11, 12]);
        }
        other => panic!("expected Table, got {:?}", other),
    }
}

#[test]
fn prev_ignored_on_first_page() {
    let state = TableReducer::reduce(loaded(12), TableIntent::PrevPage);
    assert_eq!(state.current_page, 1);
}

#[test]
fn next_ignored_on_last_page() {
    let state = TableReducer::reduce(loaded(12), TableIntent::GoTo { page: 3 });
    let state = TableReducer::reduce(state, TableIntent::NextPage);
    assert_eq!(state.current_page, 3);
}

#[test]
fn goto_out_of_range_ignored() {
    let state = TableReducer::reduce(loaded(12), TableIntent::GoTo { page: 4 });
    assert_eq!(state.current_page, 1);
    let state = TableReducer::reduce(state, TableIntent::GoTo { page: 0 });
    assert_eq!(state.current_page, 1);
}

#[test]
fn navigation_ignored_before_load() {
    let state = TableReducer::reduce(TableState::default(), TableIntent::NextPage);
    assert_eq!(state.current_page, 1);
    let state = TableReducer::reduce(state, TableIntent::GoTo { page: 2 });
    assert_eq!(state.current_page, 1);
}

#[test]
fn navigation_ignored_after_failure() {
    let failed = TableReducer::reduce(
        TableState::default(),
        TableIntent::Failed {
            reason: "offline".into(),
        },
    );
    let state = TableReducer::reduce(failed, TableIntent::NextPage);
    assert_eq!(state.current_page, 1);
}

#[test]
fn window_slot_maps_digits_to_displayed_buttons() {
    let state = loaded(100); // 20 pages
    assert_eq!(state.window_slot(1), Some(1));
    assert_eq!(state.window_slot(5), Some(5));
    assert_eq!(state.window_slot(6), None);

    let state = TableReducer::reduce(state, TableIntent::GoTo { page: 5 });
    // Window is 3..=7 now.
    assert_eq!(state.window_slot(1), Some(3));
    assert_eq!(state.window_slot(5), Some(7));
}

#[test]
fn window_slot_absent_for_single_page() {
    let state = loaded(4);
    assert_eq!(state.window_slot(1), None);
}
