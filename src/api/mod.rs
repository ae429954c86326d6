// HTTP client for the poll service
//
// One method per endpoint. Every method issues a single request, waits for it,
// and maps the status code onto ApiError. Nothing here retries or caches.

mod auth;
mod client;
mod polls;
mod results;
mod vote;

pub use client::PollClient;
