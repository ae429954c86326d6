use reqwest::StatusCode;

/// Errors returned by every poll service operation
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection refused, timeout, or any other transport-level failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status that the operation does not map to a specific error
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// Poll (and, when voting, option) does not exist
    #[error("{}", not_found_message(.poll_id, .option_id))]
    NotFound { poll_id: i64, option_id: Option<i64> },

    #[error("Username '{username}' already registered")]
    AlreadyRegistered { username: String },

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Unauthorized: invalid or expired access token")]
    Unauthorized,

    /// 200 response whose body does not match the expected record
    #[error("Malformed response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// Collaborator returned more items than were asked for
    #[error("Server returned {received} polls for a page of {requested}")]
    OversizedPage { requested: u32, received: usize },

    /// Next page offset would not fit in the `skip` parameter
    #[error("Page offset overflow after skip={skip} with page size {page_size}")]
    OffsetOverflow { skip: u32, page_size: u32 },

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn not_found_message(poll_id: &i64, option_id: &Option<i64>) -> String {
    match option_id {
        Some(option_id) => format!(
            "Poll with ID {} not found or option with ID {} not found",
            poll_id, option_id
        ),
        None => format!("Poll with ID {} not found", poll_id),
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
