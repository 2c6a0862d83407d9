use crate::campaign::Campaign;
use crate::ui::mvi::UiState;
use crate::ui::pager;

/// Status of the single dataset fetch. Transitions only away from
/// [`LoadState::Pending`], never back.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(Vec<Campaign>),
    Failed(String),
}

/// State of the campaign table: the fetch outcome plus the one value that
/// stays mutable after load, the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub load: LoadState,
    /// 1-based, kept within `[1, total_pages]` by the reducer.
    pub current_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            load: LoadState::Pending,
            current_page: 1,
        }
    }
}

impl UiState for TableState {}

/// What the body of the screen shows. The four cases are mutually
/// exclusive and resolved in this order.
#[derive(Debug, PartialEq)]
pub enum RenderState<'a> {
    Loading,
    Error(&'a str),
    NoData,
    Table {
        rows: &'a [Campaign],
        current_page: usize,
        total_pages: usize,
    },
}

impl TableState {
    /// Pure projection of the state onto its render description.
    pub fn render_state(&self) -> RenderState<'_> {
        match &self.load {
            LoadState::Pending => RenderState::Loading,
            LoadState::Failed(reason) => RenderState::Error(reason),
            LoadState::Loaded(campaigns) if campaigns.is_empty() => RenderState::NoData,
            LoadState::Loaded(campaigns) => RenderState::Table {
                rows: &campaigns[pager::visible_range(self.current_page, campaigns.len())],
                current_page: self.current_page,
                total_pages: pager::total_pages(campaigns.len()),
            },
        }
    }

    pub fn total_pages(&self) -> usize {
        match &self.load {
            LoadState::Loaded(campaigns) => pager::total_pages(campaigns.len()),
            _ => 0,
        }
    }

    /// Page number behind the `slot`-th numbered button currently shown
    /// (1-based). `None` when the slot is empty or pagination is hidden.
    pub fn window_slot(&self, slot: usize) -> Option<usize> {
        let total = self.total_pages();
        if total <= 1 || slot == 0 {
            return None;
        }
        pager::window_pages(self.current_page, total).nth(slot - 1)
    }
}
