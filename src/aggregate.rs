use serde::Serialize;

use crate::models::PollResults;

/// Vote totals and per-option shares for one poll
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub poll_id: i64,
    pub question: String,
    pub total_votes: u64,
    pub rows: Vec<OptionShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionShare {
    pub option_id: i64,
    pub text: String,
    pub vote_count: u64,

    /// Share of all votes in percent, 0 when nobody has voted
    pub percentage: f64,
}

/// Compute total votes and each option's percentage share
///
/// Rows keep the order of the payload. Equal counts get equal shares.
pub fn summarize(results: &PollResults) -> ResultsSummary {
    let total_votes = results
        .results
        .iter()
        .fold(0u64, |acc, row| acc.saturating_add(row.vote_count));

    let rows = results
        .results
        .iter()
        .map(|row| OptionShare {
            option_id: row.option_id,
            text: row.text.clone(),
            vote_count: row.vote_count,
            percentage: percentage(row.vote_count, total_votes),
        })
        .collect();

    ResultsSummary {
        poll_id: results.poll_id,
        question: results.question.clone(),
        total_votes,
        rows,
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
