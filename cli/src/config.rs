//! Command-line and environment configuration
//!
//! Defaults reproduce the fixed settings the loader has always used: a local
//! server with the stock credentials, 10 entities, 100 to 150 states each.

use clap::Parser;

use crate::error::{LoaderError, LoaderResult};
use crate::generator::GenerateParams;

#[derive(Parser, Debug)]
#[command(
    name = "statechain-loader",
    version,
    about = "Fill a graph database with Entity/State fixture chains"
)]
pub struct Cli {
    /// Server HTTP URL
    #[arg(long, default_value = statechain_sdk::DEFAULT_URL, env = "STATECHAIN_URL")]
    pub url: String,

    /// Basic-auth user
    #[arg(long, default_value = "neo4j", env = "STATECHAIN_USER")]
    pub user: String,

    /// Basic-auth password
    #[arg(long, default_value = "password", env = "STATECHAIN_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Number of Entity nodes to create
    #[arg(long, default_value_t = 10, env = "STATECHAIN_ENTITIES")]
    pub entities: u64,

    /// Minimum states per entity (inclusive)
    #[arg(long, default_value_t = 100)]
    pub states_from: usize,

    /// Maximum states per entity (exclusive)
    #[arg(long, default_value_t = 150)]
    pub states_to: usize,

    /// Seed for reproducible fixtures
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wipe a non-empty database without asking
    #[arg(long, conflicts_with = "keep_existing")]
    pub yes: bool,

    /// Keep existing data without asking
    #[arg(long)]
    pub keep_existing: bool,

    /// Write into an in-process store instead of a server
    #[arg(long)]
    pub embedded: bool,
}

/// How to answer the wipe question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Ask,
    AssumeYes,
    AssumeNo,
}

/// Where the fixtures are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Remote {
        url: String,
        user: String,
        password: String,
    },
    Embedded,
}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub target: Target,
    pub params: GenerateParams,
    pub seed: Option<u64>,
    pub prompt: PromptMode,
}

impl Cli {
    pub fn into_config(self) -> LoaderResult<LoaderConfig> {
        let prompt = if self.yes {
            PromptMode::AssumeYes
        } else if self.keep_existing {
            PromptMode::AssumeNo
        } else {
            PromptMode::Ask
        };

        let target = if self.embedded {
            Target::Embedded
        } else {
            Target::Remote {
                url: self.url,
                user: self.user,
                password: self.password,
            }
        };

        let config = LoaderConfig {
            target,
            params: GenerateParams {
                node_count: self.entities,
                states_from: self.states_from,
                states_to: self.states_to,
            },
            seed: self.seed,
            prompt,
        };
        config.validate()?;
        Ok(config)
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> LoaderResult<()> {
        if self.params.node_count == 0 {
            return Err(LoaderError::Config("--entities must be at least 1".to_string()));
        }
        if self.params.states_from > self.params.states_to {
            return Err(LoaderError::Config(format!(
                "--states-from ({}) must not exceed --states-to ({})",
                self.params.states_from, self.params.states_to
            )));
        }
        if let Target::Remote { url, .. } = &self.target {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(LoaderError::Config(format!("--url must be an http(s) URL, got {}", url)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> LoaderResult<LoaderConfig> {
        let mut argv = vec!["statechain-loader"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
            .map_err(|e| LoaderError::Config(e.to_string()))?
            .into_config()
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "--url",
            "https://graph.internal:7473",
            "--entities",
            "3",
            "--states-from",
            "2",
            "--states-to",
            "5",
            "--seed",
            "99",
            "--keep-existing",
        ])
        .unwrap();

        assert_eq!(config.params.node_count, 3);
        assert_eq!((config.params.states_from, config.params.states_to), (2, 5));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.prompt, PromptMode::AssumeNo);
        assert!(matches!(config.target, Target::Remote { ref url, .. } if url == "https://graph.internal:7473"));
    }

    #[test]
    fn test_embedded_target() {
        let config = parse(&["--embedded", "--yes"]).unwrap();
        assert_eq!(config.target, Target::Embedded);
        assert_eq!(config.prompt, PromptMode::AssumeYes);
    }

    #[test]
    fn test_rejects_zero_entities() {
        let err = parse(&["--entities", "0"]).unwrap_err();
        assert!(err.to_string().contains("--entities"));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = parse(&["--states-from", "10", "--states-to", "5"]).unwrap_err();
        assert!(matches!(err, LoaderError::Config(_)));
    }

    #[test]
    fn test_equal_bounds_are_allowed() {
        let config = parse(&["--states-from", "4", "--states-to", "4"]).unwrap();
        assert_eq!(config.params.states_from, 4);
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(parse(&["--url", "bolt://localhost:7687"]).is_err());
    }

    #[test]
    fn test_yes_conflicts_with_keep_existing() {
        assert!(parse(&["--yes", "--keep-existing"]).is_err());
    }
}
