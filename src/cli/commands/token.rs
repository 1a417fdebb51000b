use anyhow::Context;
use chrono::Duration;

use crate::auth::{issue_token, Claims};

/// Mint a local development token. The signing key must match what the
/// server was started with, so this is only useful against a dev instance.
pub fn handle(subject: &str, ttl_hours: i64) -> anyhow::Result<()> {
    let secret = std::env::var("AUTH_JWT_SECRET")
        .context("AUTH_JWT_SECRET must be set to mint a development token")?;

    let claims = Claims::new(subject, Duration::hours(ttl_hours));
    let token = issue_token(&claims, &secret)?;

    println!("{}", token);
    Ok(())
}
