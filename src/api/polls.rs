use reqwest::StatusCode;

use super::client::{PollClient, decode, read_response, request_failed};
use crate::error::ApiResult;
use crate::models::Poll;
use crate::paginator::{PageSource, Paginator};

impl PollClient {
    /// Fetch one page of polls (`GET /polls?skip=&limit=`)
    pub async fn fetch_polls(&self, skip: u32, limit: u32) -> ApiResult<Vec<Poll>> {
        let url = self.endpoint("/polls");
        tracing::debug!("GET {} (skip={}, limit={})", url, skip, limit);

        // Send request
        let response = self
            .client
            .get(&url)
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;

        let (status, body) = read_response(response).await?;

        match status {
            StatusCode::OK => decode(&body),
            status => Err(request_failed(status, body)),
        }
    }

    /// Fetch every poll, `page_size` at a time
    pub async fn fetch_all_polls(&self, page_size: u32) -> ApiResult<Vec<Poll>> {
        Paginator::new(self, page_size)?.collect_all().await
    }
}

impl PageSource for PollClient {
    async fn fetch_page(&self, skip: u32, limit: u32) -> ApiResult<Vec<Poll>> {
        self.fetch_polls(skip, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use mockito::Matcher;
    use serde_json::json;

    fn polls_json(ids: std::ops::RangeInclusive<i64>) -> String {
        let polls: Vec<_> = ids
            .map(|id| {
                json!({
                    "id": id,
                    "question": format!("Question {}", id),
                    "created_at": "2024-01-01T00:00:00",
                    "owner_id": 1,
                    "options": [{"id": id * 10, "text": "Yes", "poll_id": id}]
                })
            })
            .collect();
        serde_json::to_string(&polls).unwrap()
    }

    fn page_query(skip: u32, limit: u32) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), skip.to_string()),
            Matcher::UrlEncoded("limit".into(), limit.to_string()),
        ])
    }

    #[tokio::test]
    async fn fetch_polls_sends_skip_and_limit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/polls")
            .match_query(page_query(20, 5))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(polls_json(21..=23))
            .expect(1)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let polls = client.fetch_polls(20, 5).await.unwrap();

        assert_eq!(polls.len(), 3);
        assert_eq!(polls[0].id, 21);
        assert_eq!(polls[0].options[0].poll_id, 21);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_polls_maps_other_status_to_request_failed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/polls")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let err = client.fetch_polls(0, 10).await.unwrap_err();

        match err {
            ApiError::RequestFailed { status, body } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_polls_rejects_malformed_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/polls")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"id": 1}]"#)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let err = client.fetch_polls(0, 10).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let client = PollClient::new("http://127.0.0.1:1", None).unwrap();
        let err = client.fetch_polls(0, 10).await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn fetch_all_polls_walks_three_pages() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/polls")
            .match_query(page_query(0, 10))
            .with_status(200)
            .with_body(polls_json(1..=10))
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/polls")
            .match_query(page_query(10, 10))
            .with_status(200)
            .with_body(polls_json(11..=20))
            .expect(1)
            .create_async()
            .await;
        let third = server
            .mock("GET", "/polls")
            .match_query(page_query(20, 10))
            .with_status(200)
            .with_body(polls_json(21..=25))
            .expect(1)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let polls = client.fetch_all_polls(10).await.unwrap();

        let ids: Vec<i64> = polls.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_all_polls_with_no_polls_makes_one_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/polls")
            .match_query(page_query(0, 10))
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let polls = client.fetch_all_polls(10).await.unwrap();

        assert!(polls.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_all_polls_fails_when_a_later_page_fails() {
        let mut server = mockito::Server::new_async().await;
        let _first = server
            .mock("GET", "/polls")
            .match_query(page_query(0, 2))
            .with_status(200)
            .with_body(polls_json(1..=2))
            .create_async()
            .await;
        let _second = server
            .mock("GET", "/polls")
            .match_query(page_query(2, 2))
            .with_status(500)
            .with_body("database down")
            .create_async()
            .await;

        let client = PollClient::new(&server.url(), None).unwrap();
        let result = client.fetch_all_polls(2).await;

        assert!(matches!(result, Err(ApiError::RequestFailed { .. })));
    }
}
