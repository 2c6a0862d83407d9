use crate::ui::mvi::Reducer;
use crate::ui::table::intent::TableIntent;
use crate::ui::table::state::{LoadState, TableState};

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Load outcomes only apply while the fetch is outstanding; a
            // completion arriving later belongs to an abandoned fetch.
            TableIntent::Loaded { campaigns } => match state.load {
                LoadState::Pending => TableState {
                    load: LoadState::Loaded(campaigns),
                    current_page: 1,
                },
                _ => state,
            },
            TableIntent::Failed { reason } => match state.load {
                LoadState::Pending => TableState {
                    load: LoadState::Failed(reason),
                    current_page: state.current_page,
                },
                _ => state,
            },
            // Navigation mirrors the controls: targets a disabled or absent
            // button would have are ignored, not clamped.
            TableIntent::GoTo { page } => {
                if (1..=state.total_pages()).contains(&page) {
                    TableState {
                        current_page: page,
                        ..state
                    }
                } else {
                    state
                }
            }
            TableIntent::NextPage => {
                if state.current_page < state.total_pages() {
                    TableState {
                        current_page: state.current_page + 1,
                        ..state
                    }
                } else {
                    state
                }
            }
            TableIntent::PrevPage => {
                if state.total_pages() > 0 && state.current_page > 1 {
                    TableState {
                        current_page: state.current_page - 1,
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}
