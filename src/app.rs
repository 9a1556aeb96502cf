use std::{fs, io::Write};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::config::{Action, Config};
use crate::constants::{AppConstants, LOGO, LOGO_SVG};
use crate::data_uri::{media_type_for_path, to_data_url};
use crate::io::clipboard::copy_to_clipboard;
use crate::output::{render_report, render_summary};
use crate::verify::verify;

/// Executes one configured action, writing its result to `out`.
pub fn run(
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    debug!(?config.action, "running");
    match &config.action {
        Action::Show { full } => {
            writeln!(out, "{}", render_summary(AppConstants::get(), *full))?;
        }
        Action::Logo { raw } => {
            let text = if *raw { LOGO_SVG } else { LOGO };
            writeln!(out, "{text}")?;
            if config.copy {
                copy_to_clipboard(text, config.strict_clipboard)?;
            }
        }
        Action::Check => {
            let report = verify(AppConstants::get());
            writeln!(out, "{}", render_report(&report))?;
            report.into_result()?;
        }
        Action::Encode { path, media_type } => {
            let media_type = match media_type {
                Some(m) => m.as_str(),
                None => media_type_for_path(path).ok_or_else(|| {
                    anyhow!(
                        "Cannot guess the media type of {}; pass --media-type",
                        path.display()
                    )
                })?,
            };
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            info!(path = %path.display(), media_type, bytes = bytes.len(), "encoded");
            writeln!(out, "{}", to_data_url(media_type, &bytes))?;
        }
    }
    Ok(())
}
