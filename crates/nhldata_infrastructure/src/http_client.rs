use std::time::Duration;

use nhldata_interface::errors::{AppError, Result};

pub type HttpConnection = reqwest::Client;

pub struct HttpClientManager;

impl HttpClientManager {
    pub fn new_client(timeout: Duration) -> Result<HttpConnection> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ConfigError { msg: e.to_string() })
    }
}
