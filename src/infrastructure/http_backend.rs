// HTTP implementation of the dashboard backend
use crate::application::dashboard_backend::{BackendError, DashboardBackend};
use crate::domain::dashboard::ImageUpdate;
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const UPDATE_IMAGE_PATH: &str = "/api/update_image_ep";
const PING_PATH: &str = "/api/ping";

#[derive(Debug, Deserialize)]
struct PingResponse {
    message: String,
}

#[derive(Debug, Clone)]
pub struct HttpDashboardBackend {
    host: String,
    client: reqwest::Client,
}

impl HttpDashboardBackend {
    pub fn new(host: String, request_timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(host, builder.build()?))
    }

    pub fn with_client(host: String, client: reqwest::Client) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Parse(e.to_string()))
    }
}

#[async_trait]
impl DashboardBackend for HttpDashboardBackend {
    async fn refresh_images(&self) -> Result<ImageUpdate, BackendError> {
        let response = self
            .client
            .put(self.url(UPDATE_IMAGE_PATH))
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn ping(&self) -> Result<String, BackendError> {
        let response = self
            .client
            .get(self.url(PING_PATH))
            .header("Accept", "application/json")
            .send()
            .await?;

        let reply: PingResponse = Self::read_json(response).await?;
        Ok(reply.message)
    }
}
