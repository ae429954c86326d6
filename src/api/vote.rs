use reqwest::StatusCode;

use super::client::{PollClient, decode, read_response, request_failed};
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, Vote, VoteRequest};

impl PollClient {
    /// Cast a vote with an existing bearer token
    pub async fn vote_on_poll(
        &self,
        poll_id: i64,
        option_id: i64,
        access_token: &str,
    ) -> ApiResult<Vote> {
        let url = self.endpoint(&format!("/polls/{}/vote", poll_id));
        tracing::debug!("POST {} (option_id={})", url, option_id);

        // Token goes in the Authorization header, never in logs
        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .json(&VoteRequest { option_id })
            .send()
            .await?;
        let (status, body) = read_response(response).await?;

        match status {
            StatusCode::OK => decode(&body),
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("Vote rejected: access token not accepted");
                Err(ApiError::Unauthorized)
            }
            StatusCode::NOT_FOUND => {
                tracing::warn!("Poll {} or option {} not found", poll_id, option_id);
                Err(ApiError::NotFound {
                    poll_id,
                    option_id: Some(option_id),
                })
            }
            status => Err(request_failed(status, body)),
        }
    }

    /// Log in, then cast one vote with the fresh token
    ///
    /// A failed login returns before any vote request is sent. The token is
    /// used for this single vote and then dropped.
    pub async fn login_and_vote(
        &self,
        credentials: &Credentials,
        poll_id: i64,
        option_id: i64,
    ) -> ApiResult<Vote> {
        // Login failure returns here, before any vote request
        let token = self.login(credentials).await?;
        self.vote_on_poll(poll_id, option_id, &token.access_token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const VOTE_BODY: &str =
        r#"{"id": 9, "user_id": 4, "option_id": 2, "created_at": "2024-05-01T12:00:00"}"#;

    #[tokio::test]
    async fn vote_sends_bearer_token_and_option() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/polls/1/vote")
            .match_header("authorization", "Bearer jwt-token")
            .match_body(Matcher::Json(json!({"option_id": 2})))
            .with_status(200)
            .with_body(VOTE_BODY)
            .expect(1)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let vote = client.vote_on_poll(1, 2, "jwt-token").await.unwrap();

        assert_eq!(vote.id, 9);
        assert_eq!(vote.user_id, 4);
        assert_eq!(vote.option_id, 2);
        assert!(vote.created_at_utc().is_some());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn vote_with_bad_token_is_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/polls/1/vote")
            .with_status(401)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let err = client.vote_on_poll(1, 2, "expired").await.unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn vote_not_found_keeps_poll_and_option() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/polls/5/vote")
            .with_status(404)
            .with_body(r#"{"detail": "Option not found"}"#)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let err = client.vote_on_poll(5, 77, "jwt-token").await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::NotFound {
                poll_id: 5,
                option_id: Some(77)
            }
        ));
    }

    #[tokio::test]
    async fn vote_other_status_is_request_failed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/polls/1/vote")
            .with_status(409)
            .with_body("already voted")
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let err = client.vote_on_poll(1, 2, "jwt-token").await.unwrap_err();

        match err {
            ApiError::RequestFailed { status, body } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(body, "already voted");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn login_and_vote_uses_fresh_token() {
        let mut server = mockito::Server::new_async().await;
        let login = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"access_token": "fresh-token", "token_type": "bearer"}"#)
            .expect(1)
            .create_async()
            .await;
        let vote = server
            .mock("POST", "/polls/1/vote")
            .match_header("authorization", "Bearer fresh-token")
            .with_status(200)
            .with_body(VOTE_BODY)
            .expect(1)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let result = client
            .login_and_vote(&Credentials::new("testuser", "testpass"), 1, 2)
            .await
            .unwrap();

        assert_eq!(result.option_id, 2);
        login.assert_async().await;
        vote.assert_async().await;
    }

    #[tokio::test]
    async fn failed_login_sends_no_vote() {
        let mut server = mockito::Server::new_async().await;
        let login = server
            .mock("POST", "/login")
            .with_status(400)
            .expect(1)
            .create_async()
            .await;
        let vote = server
            .mock("POST", "/polls/1/vote")
            .with_status(200)
            .with_body(VOTE_BODY)
            .expect(0)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let err = client
            .login_and_vote(&Credentials::new("testuser", "wrong"), 1, 2)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidCredentials));
        login.assert_async().await;
        vote.assert_async().await;
    }
}
