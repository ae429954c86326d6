use reqwest::StatusCode;

use super::client::{PollClient, decode, read_response, request_failed};
use crate::error::{ApiError, ApiResult};
use crate::models::PollResults;

impl PollClient {
    /// Fetch option-level vote counts for one poll
    pub async fn get_poll_results(&self, poll_id: i64) -> ApiResult<PollResults> {
        let url = self.endpoint(&format!("/polls/{}/results", poll_id));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let (status, body) = read_response(response).await?;

        match status {
            StatusCode::OK => decode(&body),
            StatusCode::NOT_FOUND => {
                tracing::warn!("Poll {} not found", poll_id);
                Err(ApiError::NotFound {
                    poll_id,
                    option_id: None,
                })
            }
            status => Err(request_failed(status, body)),
        }
    }
}
