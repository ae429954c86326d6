use reqwest::StatusCode;

use super::client::{PollClient, decode, read_response, request_failed};
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, Token, User};

impl PollClient {
    /// Register a new user (`POST /register`, JSON body)
    pub async fn register_user(&self, credentials: &Credentials) -> ApiResult<User> {
        let url = self.endpoint("/register");
        tracing::debug!("POST {} (username={})", url, credentials.username);

        let response = self.client.post(&url).json(credentials).send().await?;
        let (status, body) = read_response(response).await?;

        match status {
            StatusCode::OK => decode(&body),
            StatusCode::BAD_REQUEST => {
                tracing::warn!("Username '{}' already registered", credentials.username);
                Err(ApiError::AlreadyRegistered {
                    username: credentials.username.clone(),
                })
            }
            status => Err(request_failed(status, body)),
        }
    }

    /// Exchange credentials for an access token (`POST /login`, form body)
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Token> {
        let url = self.endpoint("/login");
        tracing::debug!("POST {} (username={})", url, credentials.username);

        // OAuth2 password flow expects a form body, not JSON
        let form = [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];
        let response = self.client.post(&url).form(&form).send().await?;
        let (status, body) = read_response(response).await?;

        match status {
            StatusCode::OK => decode(&body),
            StatusCode::BAD_REQUEST => {
                tracing::warn!("Login rejected for '{}'", credentials.username);
                Err(ApiError::InvalidCredentials)
            }
            status => Err(request_failed(status, body)),
        }
    }
}
