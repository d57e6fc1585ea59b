use crate::models::{DailyRecord, Parameter};
use reqwest::StatusCode;
use std::env;
use tracing::error;

pub const PARAMETERS_PATH: &str = "/api/parameters";
pub const DAILY_PARAMETERS_PATH: &str = "/api/daily-parameters";

#[derive(Debug, Clone)]
pub struct SchemaResponse {
    pub status: StatusCode,
    pub parameters: Vec<Parameter>,
}

/// The widget's only view of the network. Implementations resolve every
/// failure to a status code; no transport error crosses this boundary.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn fetch_parameters(&self) -> SchemaResponse;
    async fn submit_record(&self, record: &DailyRecord) -> StatusCode;
}

pub fn resolve_base_url() -> String {
    if let Ok(url) = env::var("HABIT_API_BASE_URL") {
        return url.trim_end_matches('/').to_string();
    }

    "http://127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(resolve_base_url())
    }
}

impl Backend for HttpBackend {
    async fn fetch_parameters(&self) -> SchemaResponse {
        let url = format!("{}{PARAMETERS_PATH}", self.base_url);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("parameter fetch failed: {err}");
                return SchemaResponse {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    parameters: Vec::new(),
                };
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return SchemaResponse {
                status,
                parameters: Vec::new(),
            };
        }

        let parameters = match response.bytes().await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(parameters) => parameters,
                Err(err) => {
                    error!("failed to parse parameter schema: {err}");
                    Vec::new()
                }
            },
            Err(err) => {
                error!("failed to read parameter schema body: {err}");
                Vec::new()
            }
        };

        SchemaResponse { status, parameters }
    }

    async fn submit_record(&self, record: &DailyRecord) -> StatusCode {
        let url = format!("{}{DAILY_PARAMETERS_PATH}", self.base_url);
        match self.client.post(&url).json(record).send().await {
            Ok(response) => response.status(),
            Err(err) => {
                error!("daily record submit failed: {err}");
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}
