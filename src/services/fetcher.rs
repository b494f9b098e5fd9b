use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::services::config_loader::FetchConfig;

/// HTTP client for the published sheets with bounded retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    attempts: u32,
    initial_delay: Duration,
}

pub fn is_retriable_status(status: u16) -> bool {
    status >= 500 || status == 408
}

/// Wait before the attempt following `attempt` (1-based).
pub fn backoff_delay(initial: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    initial.saturating_mul(factor)
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("icepc-standings/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            attempts: config.retries.max(1),
            initial_delay: config.initial_delay(),
        })
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!("GET {} (attempt {}/{})", url, attempt, self.attempts);

            let err = match self.fetch_once(url).await {
                Ok(text) => return Ok(text),
                Err(err) if !err.is_retriable() => return Err(err),
                Err(err) => err,
            };

            warn!("Fetch attempt {} failed for {}: {}", attempt, url, err);
            if attempt >= self.attempts {
                return Err(FetchError::Exhausted {
                    url: url.to_string(),
                    attempts: attempt,
                    last: Box::new(err),
                });
            }
            tokio::time::sleep(backoff_delay(self.initial_delay, attempt)).await;
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            let status = status.as_u16();
            return Err(if is_retriable_status(status) {
                FetchError::RetriableStatus {
                    url: url.to_string(),
                    status,
                }
            } else {
                FetchError::Status {
                    url: url.to_string(),
                    status,
                }
            });
        }

        response.text().await.map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retriable_statuses() {
        assert!(is_retriable_status(500));
        assert!(is_retriable_status(503));
        assert!(is_retriable_status(408));
        assert!(!is_retriable_status(404));
        assert!(!is_retriable_status(403));
    }

    #[test]
    fn backoff_doubles() {
        let initial = Duration::from_millis(1000);
        assert_eq!(backoff_delay(initial, 1), Duration::from_millis(1000));
        assert_eq!(backoff_delay(initial, 2), Duration::from_millis(2000));
        assert_eq!(backoff_delay(initial, 3), Duration::from_millis(4000));
    }

    #[test]
    fn client_errors_are_final() {
        let err = FetchError::Status {
            url: "http://example.invalid".to_string(),
            status: 404,
        };
        assert!(!err.is_retriable());
    }
}
