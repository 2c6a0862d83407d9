//! The dataset source: one best-effort fetch of the campaign list.

mod client;
mod error;

pub use client::{fetch_campaigns, spawn_loader, DATASET_URL};
pub use error::SourceError;
