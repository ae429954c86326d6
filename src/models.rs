use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A poll as exposed by the listing endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Poll {
    pub id: i64,
    pub question: String,

    /// Creation timestamp in ISO-8601 format, kept as sent by the server
    pub created_at: String,

    pub owner_id: i64,

    #[serde(default)]
    pub options: Vec<PollOption>,
}

impl Poll {
    /// Creation time as UTC, if the server timestamp can be parsed
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// One selectable choice within a poll
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PollOption {
    pub id: i64,
    pub text: String,
    pub poll_id: i64,
}

/// Vote count for a single option
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResultRow {
    pub option_id: i64,
    #[serde(default)]
    pub text: String,
    pub vote_count: u64,
}

/// Payload of `GET /polls/{id}/results`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PollResults {
    pub poll_id: i64,
    pub question: String,
    pub results: Vec<ResultRow>,
}

/// Username/password pair sent to `/register` and `/login`
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Hand-written so the password never reaches logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registered user returned by `/register`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Access token returned by `/login`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Token {
    pub access_token: String,

    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct VoteRequest {
    pub option_id: i64,
}

/// Vote recorded by `/polls/{id}/vote`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vote {
    pub id: i64,
    pub user_id: i64,
    pub option_id: i64,
    pub created_at: String,
}

impl Vote {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse an RFC 3339 timestamp, or a zone-less ISO timestamp taken as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
