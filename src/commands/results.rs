use anyhow::{Context, Result};

use poll_client::{ApiResult, PollClient, PollResults, ResultsSummary, summarize};

use super::utils::{block_on, print_json};

/// Show results for each requested poll
///
/// A failure for one poll is reported and the rest are still queried.
pub fn show(client: &PollClient, poll_ids: &[i64], json: bool) -> Result<()> {
    // Fetch every poll before printing anything
    let outcomes = block_on(fetch_outcomes(client, poll_ids))?;

    let mut summaries = Vec::new();
    let mut failed = 0usize;

    for (poll_id, outcome) in outcomes {
        match outcome {
            Ok(results) => {
                let summary = summarize(&results);
                if !json {
                    print_summary(&summary);
                }
                summaries.push(summary);
            }
            // Several polls: report and keep going
            Err(e) if poll_ids.len() > 1 => {
                tracing::error!("Failed to fetch results for poll {}: {}", poll_id, e);
                eprintln!("Poll {}: {}", poll_id, e);
                failed += 1;
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to fetch results for poll {}", poll_id));
            }
        }
    }

    if json {
        print_json(&summaries)?;
    }

    if failed > 0 {
        anyhow::bail!("{} of {} polls could not be fetched", failed, poll_ids.len());
    }

    Ok(())
}

/// Query each poll in turn, keeping every outcome
async fn fetch_outcomes(
    client: &PollClient,
    poll_ids: &[i64],
) -> Vec<(i64, ApiResult<PollResults>)> {
    let mut outcomes = Vec::with_capacity(poll_ids.len());
    for &poll_id in poll_ids {
        outcomes.push((poll_id, client.get_poll_results(poll_id).await));
    }
    outcomes
}

fn print_summary(summary: &ResultsSummary) {
    println!();
    println!("Poll Results for Poll ID: {}", summary.poll_id);
    println!("Question: {}", summary.question);
    println!();
    println!("Results:");
    println!("{}", "-".repeat(50));

    for row in &summary.rows {
        println!("Option {}: {}", row.option_id, row.text);
        println!("  Votes: {} ({:.1}%)", row.vote_count, row.percentage);
        println!();
    }

    println!("Total votes: {}", summary.total_votes);
}
