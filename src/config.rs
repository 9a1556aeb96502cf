use std::path::PathBuf;

use crate::cli::{Cli, Command};
use anyhow::Result;
use clap::Parser;

/// What the binary was asked to do, detached from clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show { full: bool },
    Logo { raw: bool },
    Check,
    Encode { path: PathBuf, media_type: Option<String> },
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub action: Action,
    pub copy: bool,
    pub strict_clipboard: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Self::from(Cli::parse()))
    }

    /// Parse an explicit argument list (first item is the binary name).
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from(Cli::try_parse_from(args)?))
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let (action, copy, strict_clipboard) = match cli.command {
            Command::Show { full } => (Action::Show { full }, false, false),
            Command::Logo {
                raw,
                copy,
                strict_clipboard,
            } => (Action::Logo { raw }, copy, strict_clipboard),
            Command::Check => (Action::Check, false, false),
            Command::Encode { path, media_type } => {
                (Action::Encode { path, media_type }, false, false)
            }
        };
        Config {
            action,
            copy,
            strict_clipboard,
        }
    }
}
