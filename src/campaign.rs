//! Campaign records as delivered by the remote dataset.

use serde::Deserialize;

/// One crowdfunding campaign entry.
///
/// The source JSON carries many more fields per entry; only the three
/// consumed by the table are decoded, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Campaign {
    #[serde(rename = "s.no")]
    pub serial_no: u32,
    /// Funding progress in percent. May exceed 100 for overfunded campaigns.
    #[serde(rename = "percentage.funded")]
    pub percentage_funded: f64,
    #[serde(rename = "amt.pledged")]
    pub amount_pledged: f64,
}
