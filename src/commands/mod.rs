pub mod account;
pub mod polls;
pub mod results;
pub mod utils;
pub mod vote;

use anyhow::{Context, Result};

use poll_client::config::resolve_path;
use poll_client::{ClientConfig, Credentials, PollClient};

use crate::cli::{Args, Commands};
use utils::init_logging;
use vote::VoteAuth;

/// Load configuration, set up logging, and run the requested command
pub fn run(args: Args) -> Result<()> {
    // Load configuration
    let config_path = resolve_path(args.config.as_deref());
    let mut config = match &config_path {
        Some(path) => ClientConfig::load(path),
        None => Ok(ClientConfig::default()),
    }
    .context("Failed to load configuration")?;

    // Initialize logging
    init_logging(args.verbose, &config.logging.level);

    match &config_path {
        Some(path) => tracing::debug!("Using config file: {}", path.display()),
        None => tracing::debug!("No config file found, using defaults"),
    }

    // Command-line base URL overrides the file
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
        config.validate().context("Invalid --base-url")?;
    }

    tracing::debug!("Using poll service at {}", config.api.base_url);

    let client = PollClient::from_config(&config.api).context("Failed to create HTTP client")?;

    match args.command {
        Commands::Polls {
            skip,
            limit,
            all,
            page_size,
        } => {
            if all {
                polls::list_all(&client, page_size.unwrap_or(config.api.page_size), args.json)
            } else {
                polls::list_page(&client, skip, limit.unwrap_or(config.api.page_size), args.json)
            }
        }
        Commands::Results { poll_ids } => results::show(&client, &poll_ids, args.json),
        Commands::Register { credentials } => account::register(
            &client,
            Credentials::new(credentials.username, credentials.password),
            args.json,
        ),
        Commands::Login { credentials } => account::login(
            &client,
            Credentials::new(credentials.username, credentials.password),
            args.json,
        ),
        Commands::Vote {
            poll_id,
            option_id,
            token,
            username,
            password,
        } => {
            // An explicit token skips the login step
            let auth = match (token, username, password) {
                (Some(token), _, _) => VoteAuth::Token(token),
                (None, Some(username), Some(password)) => {
                    VoteAuth::Login(Credentials::new(username, password))
                }
                _ => anyhow::bail!("Provide --token, or --username and --password"),
            };
            vote::cast(&client, poll_id, option_id, auth, args.json)
        }
    }
}
