// src/bin/issue_dev_token.rs
use abm_core::{
    application::dto::Session, config::AppConfig, domain::tenant::UserId,
    infrastructure::security::BiscuitSessionVerifier,
};
use anyhow::{Context, Result, bail};
use std::env;

/// Prints a session token for local development.
///
/// Usage: `issue_dev_token <user-uuid> [email]`
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut args = env::args().skip(1);
    let Some(raw_user_id) = args.next() else {
        bail!("usage: issue_dev_token <user-uuid> [email]");
    };
    let user_id: UserId = raw_user_id
        .parse()
        .with_context(|| format!("invalid user id: {raw_user_id}"))?;
    let email = args.next();

    let config = AppConfig::from_env()?;
    let verifier = BiscuitSessionVerifier::new(config.biscuit_private_key(), config.token_ttl())?;
    let token = verifier.issue(&Session::new(user_id, email))?;

    println!("{token}");
    Ok(())
}
