use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use nhldata_interface::errors::{AppError, Result};
use nhldata_interface::nhl::{
    model::{DateRange, GameBoxScore, Schedule, API_DATE_FORMAT},
    service::NhlService,
};

use crate::http_client::HttpConnection;

#[derive(Clone)]
pub struct HttpNhlService {
    client: HttpConnection,
    base_url: String,
}

impl HttpNhlService {
    pub fn new(client: HttpConnection, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        debug!(%url, ?query, "requesting");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| request_error(&url, e))?;

        response.json::<T>().await.map_err(|e| request_error(&url, e))
    }
}

// Maps a reqwest failure to its category and logs it. Nothing is retried.
fn request_error(url: &str, e: reqwest::Error) -> AppError {
    let error = if e.is_timeout() {
        AppError::TimeoutError {
            msg: format!("{}: {}", url, e),
        }
    } else if let Some(status) = e.status() {
        AppError::StatusError {
            msg: format!("{} returned {}", url, status),
        }
    } else if e.is_decode() {
        AppError::DecodeError {
            msg: format!("{}: {}", url, e),
        }
    } else {
        AppError::NetworkError {
            msg: format!("{}: {}", url, e),
        }
    };

    error!(category = error.category(), %url, error = %e, "request failed");
    error
}

#[async_trait]
impl NhlService for HttpNhlService {
    async fn get_schedule(&self, range: &DateRange) -> Result<Schedule> {
        let query = [
            ("startDate", range.start().format(API_DATE_FORMAT).to_string()),
            ("endDate", range.end().format(API_DATE_FORMAT).to_string()),
        ];

        self.get("schedule", &query).await
    }

    async fn get_game_box_score(&self, game_id: u64) -> Result<GameBoxScore> {
        self.get(&format!("game/{}/boxscore", game_id), &[]).await
    }
}
