use std::sync::mpsc::Sender;

use reqwest::Client;
use tracing::{error, info};

use crate::campaign::Campaign;
use crate::source::error::SourceError;
use crate::ui::events::AppEvent;

pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/saaslabsco/frontend-assignment/refs/heads/master/frontend-assignment.json";

/// Fetch and decode the campaign dataset.
///
/// A non-2xx response is a failure even when the body parses; the body is
/// decoded separately from the transfer so parse failures keep their own
/// error variant.
pub async fn fetch_campaigns(client: &Client, url: &str) -> Result<Vec<Campaign>, SourceError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(SourceError::Parse)
}

/// Spawn the single dataset fetch and report its outcome on the app event
/// channel.
///
/// There is no retry and no cancellation. If the UI is gone by the time the
/// response arrives, the send fails and the result is dropped.
pub fn spawn_loader(url: String, events: Sender<AppEvent>) {
    tokio::spawn(async move {
        let client = Client::new();
        let event = match fetch_campaigns(&client, &url).await {
            Ok(campaigns) => {
                info!(count = campaigns.len(), "dataset loaded");
                AppEvent::DatasetLoaded(campaigns)
            }
            Err(err) => {
                error!(%err, "dataset fetch failed");
                AppEvent::FetchFailed(err.to_string())
            }
        };
        let _ = events.send(event);
    });
}
