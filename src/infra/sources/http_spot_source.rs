use crate::domain::models::spot::ParkingSpot;
use crate::domain::ports::SpotSource;
use crate::error::AppError;
use crate::infra::sources::decode_envelope;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, warn};

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 250;

pub struct HttpSpotSource {
    client: Client,
    url: String,
}

impl HttpSpotSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            url,
        }
    }
}

#[async_trait]
impl SpotSource for HttpSpotSource {
    async fn fetch_spots(&self) -> Result<Vec<ParkingSpot>, AppError> {
        let mut retries = 0;
        let mut backoff = INITIAL_BACKOFF_MS;

        loop {
            match self.client.get(&self.url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.bytes().await?;
                        let spots = decode_envelope(&body)?;
                        debug!("Fetched {} spots from {}", spots.len(), self.url);
                        return Ok(spots);
                    } else if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                        if retries >= MAX_RETRIES {
                            error!("Spot API failed after {} retries. Status: {}", retries, status);
                            return Err(AppError::Upstream(format!("Spot API returned {}", status)));
                        }
                        warn!("Spot API transient error {}. Retrying in {}ms...", status, backoff);
                    } else {
                        let text = response.text().await.unwrap_or_default();
                        error!("Spot API rejected request {}: {}", status, text);
                        return Err(AppError::Upstream(format!("Spot API returned {}: {}", status, text)));
                    }
                }
                Err(e) => {
                    if retries >= MAX_RETRIES {
                        error!("Spot API network error after {} retries: {:?}", retries, e);
                        return Err(AppError::Http(e));
                    }
                    warn!("Spot API network error. Retrying in {}ms... {:?}", backoff, e);
                }
            }

            sleep(Duration::from_millis(backoff)).await;
            retries += 1;
            backoff *= 2;
        }
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}
