use anyhow::{Context, Result};

use poll_client::{Credentials, PollClient};

use super::utils::{block_on, print_json};

/// Register a new user
pub fn register(client: &PollClient, credentials: Credentials, json: bool) -> Result<()> {
    let user = block_on(client.register_user(&credentials))?
        .context("Registration failed")?;

    if json {
        return print_json(&user);
    }

    println!("✓ User registered successfully");
    println!("  ID:       {}", user.id);
    println!("  Username: {}", user.username);

    Ok(())
}

/// Log in and print the access token
pub fn login(client: &PollClient, credentials: Credentials, json: bool) -> Result<()> {
    let token = block_on(client.login(&credentials))?.context("Login failed")?;

    if json {
        return print_json(&token);
    }

    println!("{}", token.access_token);

    Ok(())
}
