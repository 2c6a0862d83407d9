//! Shared fixtures and the mock dataset source.

#![allow(dead_code)]

pub mod mock_source;

use pledgeboard::campaign::Campaign;

/// `count` campaigns with 1-based serials and recognizable amounts.
pub fn make_campaigns(count: usize) -> Vec<Campaign> {
    (1..=count)
        .map(|i| Campaign {
            serial_no: i as u32,
            percentage_funded: 10.0 * i as f64,
            amount_pledged: 1_000.0 * i as f64,
        })
        .collect()
}

/// Dataset body in the shape the real source serves: one JSON array, each
/// entry carrying the three consumed keys plus fields the decoder must
/// ignore.
pub fn fixture_json(count: usize) -> String {
    let entries: Vec<String> = (0..count)
        .map(|i| {
            format!(
                concat!(
                    r#"{{"s.no":{},"amt.pledged":{},"blurb":"project {}","by":"maker {}","#,
                    r#""country":"US","currency":"usd","percentage.funded":{}}}"#
                ),
                i,
                15_823 + i,
                i,
                i,
                100 + i
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}
