//! statechain loader — fills a graph database with Entity/State chains
//!
//! Each entity gets a random-length chain of states wired with `HAS_STATE`,
//! `NEXT` and `CURRENT` relationships, every one of them dated. The store is
//! reached through `statechain_sdk::GraphClient`, so the same run can target
//! a remote server or an in-process store.

pub mod config;
pub mod error;
pub mod generator;
pub mod progress;
pub mod prompt;
pub mod random;

pub use config::{Cli, LoaderConfig, PromptMode, Target};
pub use error::{LoaderError, LoaderResult};
pub use generator::{generate, offer_wipe, GenerateParams, GenerationReport, WipeOutcome};
pub use prompt::{AssumeNo, AssumeYes, Confirm, LinePrompt, StdinPrompt};
