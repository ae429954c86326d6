//! Client for a poll service: list and paginate polls, fetch and summarize
//! results, register, log in and vote.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod paginator;

pub use aggregate::{OptionShare, ResultsSummary, summarize};
pub use api::PollClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use models::{Credentials, Poll, PollOption, PollResults, ResultRow, Token, User, Vote};
pub use paginator::{PageSource, Paginator};
