use std::time::Duration;

use clap::Subcommand;
use messaging_auth_impl::AccessTokenClaims;
use messaging_config::Config;
use messaging_di::Provide;
use messaging_shared_contracts::jwt::JwtService;

use crate::environment::{types::Jwt, ConfigProvider};

#[derive(Debug, Subcommand)]
pub enum JwtCommand {
    /// Sign an admin access token
    Sign {
        /// The time to live in seconds
        #[arg(long, default_value = "3600")]
        ttl: u64,
        /// The subject of the token
        #[arg(default_value = "admin")]
        sub: String,
    },
}

impl JwtCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            JwtCommand::Sign { ttl, sub } => sign(&config, sub, Duration::from_secs(ttl)),
        }
    }
}

fn sign(config: &Config, sub: String, ttl: Duration) -> anyhow::Result<()> {
    let mut provider = ConfigProvider::new(config)?;
    let jwt_service: Jwt = provider.provide();

    let jwt = jwt_service.sign(AccessTokenClaims { sub }, ttl)?;
    println!("{jwt}");

    Ok(())
}
