use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Poll Service Client
///
/// Lists polls, shows results, registers users and casts votes
/// against a poll service over HTTP.
#[derive(Parser, Debug)]
#[command(name = "poll-client")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the poll service (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List polls (one page, or every page with --all)
    Polls {
        /// Number of polls to skip
        #[arg(long, default_value = "0", conflicts_with = "all")]
        skip: u32,

        /// Maximum number of polls to return (defaults to the configured page size)
        #[arg(long, conflicts_with = "all")]
        limit: Option<u32>,

        /// Fetch every poll by following pages until the last one
        #[arg(long)]
        all: bool,

        /// Page size used with --all (defaults to the configured page size)
        #[arg(long, requires = "all")]
        page_size: Option<u32>,
    },
    /// Show vote totals and percentages for one or more polls
    Results {
        /// Poll IDs
        #[arg(required = true)]
        poll_ids: Vec<i64>,
    },
    /// Register a new user
    Register {
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Log in and print an access token
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Cast a vote with a token, or log in first with --username/--password
    Vote {
        /// Poll to vote on
        poll_id: i64,

        /// Option to vote for
        option_id: i64,

        /// Access token from a previous login
        #[arg(long, conflicts_with_all = ["username", "password"])]
        token: Option<String>,

        /// Username to log in with before voting
        #[arg(long, requires = "password")]
        username: Option<String>,

        /// Password to log in with before voting
        #[arg(long, requires = "username")]
        password: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct CredentialArgs {
    /// Username
    #[arg(long)]
    pub username: String,

    /// Password
    #[arg(long)]
    pub password: String,
}
