use crate::application::PollApi;
use crate::domain::{NewPoll, Poll, PollId, PollResult, VoteRequest};
use quickpoll_errors::AppError;
use serde::de::DeserializeOwned;
use url::Url;

const POLLS_PATH: &str = "/api/polls";

/// HTTP client for the polls API, rooted at the origin that serves the UI.
#[derive(Clone)]
pub struct PollsClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl PollsClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::Internal(format!("bad endpoint {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http_client
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(|e| AppError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Request(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("GET {} returned {} with undecodable body: {}", path, status, e);
            AppError::Decode(e.to_string())
        })
    }

    // Write responses are not inspected; only reaching the server matters.
    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let response = self
            .http_client
            .post(self.endpoint(path)?)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Request(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!("POST {} returned {}", path, response.status());
        }
        Ok(())
    }
}

impl PollApi for PollsClient {
    async fn list_polls(&self) -> Result<Vec<Poll>, AppError> {
        self.get_json(POLLS_PATH).await
    }

    async fn create_poll(&self, poll: &NewPoll) -> Result<(), AppError> {
        self.post_json(POLLS_PATH, poll).await
    }

    async fn cast_vote(&self, poll_id: &PollId, option: &str) -> Result<(), AppError> {
        let path = format!("{POLLS_PATH}/{poll_id}/vote");
        self.post_json(&path, &VoteRequest::new(option)).await
    }

    async fn poll_results(&self, poll_id: &PollId) -> Result<Vec<PollResult>, AppError> {
        self.get_json(&format!("{POLLS_PATH}/{poll_id}/results")).await
    }
}
