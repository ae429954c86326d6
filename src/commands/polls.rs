use anyhow::{Context, Result};

use poll_client::{Poll, PollClient};

use super::utils::{block_on, print_json};

/// List one page of polls
pub fn list_page(client: &PollClient, skip: u32, limit: u32, json: bool) -> Result<()> {
    let polls = block_on(client.fetch_polls(skip, limit))?
        .context("Failed to fetch polls")?;

    if json {
        return print_json(&polls);
    }

    println!("Fetched {} polls:", polls.len());
    print_polls(&polls);

    Ok(())
}

/// List every poll by paging through the listing endpoint
pub fn list_all(client: &PollClient, page_size: u32, json: bool) -> Result<()> {
    let polls = block_on(client.fetch_all_polls(page_size))?
        .context("Failed to fetch all polls")?;

    if json {
        return print_json(&polls);
    }

    print_polls(&polls);
    println!();
    println!("Total polls found: {}", polls.len());

    Ok(())
}

fn print_polls(polls: &[Poll]) {
    for poll in polls {
        let created = poll
            .created_at_utc()
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| poll.created_at.clone());

        println!(
            "- Poll {}: {} ({} options, created {})",
            poll.id,
            poll.question,
            poll.options.len(),
            created
        );
    }
}
