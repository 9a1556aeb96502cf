use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gt-constants")]
#[command(about = "Print, export and verify the front-end constants (banner, timeout, page size, logo).")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every constant on its own line.
    Show {
        /// Print the whole logo data URI instead of its size.
        #[arg(short = 'f', long = "full")]
        full: bool,
    },

    /// Print the logo as a data URI.
    Logo {
        /// Print the bare SVG markup instead.
        #[arg(short = 'r', long = "raw")]
        raw: bool,

        /// Also copy the output to the clipboard.
        #[arg(short = 'c', long = "copy")]
        copy: bool,

        /// Fail instead of warning when the clipboard is unavailable.
        #[arg(long = "strict-clipboard", requires = "copy")]
        strict_clipboard: bool,
    },

    /// Verify every constant and exit non-zero on failure.
    Check,

    /// Encode an image file as a base64 data URI.
    Encode {
        /// Image to encode.
        path: PathBuf,

        /// Media type to use instead of guessing from the extension.
        #[arg(short = 't', long = "media-type")]
        media_type: Option<String>,
    },
}
