use anyhow::{Context, Result};

use poll_client::{Credentials, PollClient, Vote};

use super::utils::{block_on, print_json};

/// How the vote request gets its bearer token
pub enum VoteAuth {
    Token(String),
    Login(Credentials),
}

/// Cast a vote, logging in first when credentials were given
pub fn cast(
    client: &PollClient,
    poll_id: i64,
    option_id: i64,
    auth: VoteAuth,
    json: bool,
) -> Result<()> {
    let vote = match auth {
        VoteAuth::Token(token) => block_on(client.vote_on_poll(poll_id, option_id, &token))?
            .context("Failed to cast vote")?,
        VoteAuth::Login(credentials) => {
            block_on(client.login_and_vote(&credentials, poll_id, option_id))?
                .context("Failed to login and vote")?
        }
    };

    if json {
        return print_json(&vote);
    }

    print_vote(poll_id, &vote);

    Ok(())
}

fn print_vote(poll_id: i64, vote: &Vote) {
    println!("✓ Vote cast successfully");
    println!("  Vote ID: {}", vote.id);
    println!("  Poll:    {}", poll_id);
    println!("  Option:  {}", vote.option_id);
    println!("  User:    {}", vote.user_id);
    if let Some(created) = vote.created_at_utc() {
        println!("  At:      {}", created.format("%Y-%m-%d %H:%M:%S %Z"));
    }
}
