use std::fmt::Write;

use crate::constants::AppConstants;
use crate::data_uri::DataUri;
use crate::verify::Report;

const LABEL_WIDTH: usize = 17;

/// One aligned line per constant. With `full`, the logo is printed whole.
pub fn render_summary(
    constants: &AppConstants,
    full: bool,
) -> String {
    let logo = if full {
        constants.logo.to_string()
    } else {
        match DataUri::parse(constants.logo) {
            Ok(uri) => format!("{}, {} bytes", uri.media_type, uri.payload.len()),
            Err(_) => format!("unparsed, {} bytes", constants.logo.len()),
        }
    };
    let rows = [
        ("banner", constants.banner.to_string()),
        ("message_timeout", format!("{} ms", constants.message_timeout)),
        ("page_size", constants.page_size.to_string()),
        ("logo", logo),
    ];
    rows.iter()
        .map(|(label, value)| format!("{label:<LABEL_WIDTH$}{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `ok` / `FAIL` line per check, followed by a totals line.
pub fn render_report(report: &Report) -> String {
    let mut s = String::new();
    for c in &report.checks {
        let status = if c.passed { "ok" } else { "FAIL" };
        writeln!(s, "{status:<6}{:<LABEL_WIDTH$}{}", c.name, c.detail).unwrap();
    }
    let failed = report.failures().count();
    write!(
        s,
        "{} checks, {} passed, {} failed",
        report.checks.len(),
        report.checks.len() - failed,
        failed
    )
    .unwrap();
    s
}
