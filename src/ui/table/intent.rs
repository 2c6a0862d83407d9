use crate::campaign::Campaign;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TableIntent {
    /// The fetch resolved with the full dataset.
    Loaded { campaigns: Vec<Campaign> },
    /// The fetch failed; `reason` is what the user sees.
    Failed { reason: String },
    /// Jump to a page from the numbered buttons.
    GoTo { page: usize },
    NextPage,
    PrevPage,
}

impl Intent for TableIntent {}
