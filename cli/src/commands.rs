use std::time::Duration;

use clap::{Parser, Subcommand};
use rickmorty_core::{ApiError, ClientConfig};

#[derive(Parser)]
#[command(name = "rickmorty")]
#[command(about = "Browse characters from the Rick and Morty API.")]
pub struct CommandLine {
    /// API base URL (overrides RICKMORTY_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides RICKMORTY_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List the first characters of the catalogue
    #[command(alias = "l")]
    List,
    /// Show one character in detail
    #[command(alias = "s")]
    Show { id: u32 },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Environment configuration with command-line flags layered on top.
    pub fn config(&self) -> Result<ClientConfig, ApiError> {
        let mut config = ClientConfig::from_env()?;
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_global_flags() {
        let cli = CommandLine::try_parse_from([
            "rickmorty",
            "show",
            "42",
            "--base-url",
            "http://127.0.0.1:3000/api",
            "--timeout",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.command, Commands::Show { id: 42 });
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:3000/api"));
        assert_eq!(cli.timeout, Some(3));
    }

    #[test]
    fn list_alias_is_accepted() {
        let cli = CommandLine::try_parse_from(["rickmorty", "l"]).unwrap();
        assert_eq!(cli.command, Commands::List);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(CommandLine::try_parse_from(["rickmorty", "--timeout", "0", "list"]).is_err());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(CommandLine::try_parse_from(["rickmorty", "show", "rick"]).is_err());
    }
}
