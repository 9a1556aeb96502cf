use anyhow::{Result, anyhow};
use tracing::debug;

use crate::constants::AppConstants;
use crate::data_uri::DataUri;
use crate::svg;

/// Outcome of a single named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    fn pass(
        name: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            name,
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(
        name: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            name,
            passed: false,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub checks: Vec<Check>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Turns a failed report into an error naming every failed check.
    pub fn into_result(self) -> Result<Self> {
        if self.is_ok() {
            return Ok(self);
        }
        let names: Vec<&str> = self.failures().map(|c| c.name).collect();
        Err(anyhow!("constant checks failed: {}", names.join(", ")))
    }
}

/// Runs every property check against `constants`, in a fixed order.
pub fn verify(constants: &AppConstants) -> Report {
    let checks = vec![
        check_banner(constants.banner),
        check_positive("message_timeout", constants.message_timeout as usize, "ms"),
        check_positive("page_size", constants.page_size, "items"),
        check_logo(constants.logo),
    ];
    for c in &checks {
        debug!(check = c.name, passed = c.passed, "{}", c.detail);
    }
    Report { checks }
}

fn check_banner(banner: &str) -> Check {
    if banner.trim().is_empty() {
        Check::fail("banner", "banner is empty")
    } else {
        Check::pass("banner", format!("{} chars", banner.chars().count()))
    }
}

fn check_positive(
    name: &'static str,
    value: usize,
    unit: &str,
) -> Check {
    if value == 0 {
        Check::fail(name, "must be greater than zero")
    } else {
        Check::pass(name, format!("{value} {unit}"))
    }
}

fn check_logo(logo: &str) -> Check {
    const NAME: &str = "logo";
    let uri = match DataUri::parse(logo) {
        Ok(uri) => uri,
        Err(e) => return Check::fail(NAME, e.to_string()),
    };
    if !uri.is_image() {
        return Check::fail(NAME, format!("{} is not an image type", uri.media_type));
    }
    let bytes = match uri.decode() {
        Ok(b) => b,
        Err(e) => return Check::fail(NAME, e.to_string()),
    };
    let markup = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(_) => return Check::fail(NAME, "payload is not UTF-8"),
    };
    match svg::inspect(&markup) {
        Ok(info) => Check::pass(
            NAME,
            format!("{}, {} elements", uri.media_type, info.elements),
        ),
        Err(e) => Check::fail(NAME, e.to_string()),
    }
}
