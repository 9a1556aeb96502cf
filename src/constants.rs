// Front-end constants shared by every page and component
use chrono::TimeDelta;

/// Banner shown under the navbar on every page.
pub const BANNER: &str = "引き締めたいカラダのために！";

/// How long a UI message stays on screen, in milliseconds.
pub const MESSAGE_TIMEOUT: u32 = 2000;

/// Items per page in paginated lists.
pub const PAGE_SIZE: usize = 25;

/// Media type of the embedded logo.
pub const LOGO_MEDIA_TYPE: &str = "image/svg+xml";

/// Bare SVG markup of the logo.
pub const LOGO_SVG: &str = include_str!("assets/logo.svg");

/// Logo as a data URI, usable directly as an `<img src>`. Also the default user picture.
pub const LOGO: &str = concat!(
    "data:image/svg+xml;charset=utf-8,",
    include_str!("assets/logo.svg")
);

/// `MESSAGE_TIMEOUT` as a duration for scheduling message removal.
pub fn message_timeout() -> TimeDelta {
    TimeDelta::milliseconds(i64::from(MESSAGE_TIMEOUT))
}

/// All constants in one copyable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConstants {
    pub banner: &'static str,
    pub message_timeout: u32,
    pub page_size: usize,
    pub logo: &'static str,
}

impl AppConstants {
    pub const CURRENT: AppConstants = AppConstants {
        banner: BANNER,
        message_timeout: MESSAGE_TIMEOUT,
        page_size: PAGE_SIZE,
        logo: LOGO,
    };

    /// Process-wide snapshot; every call returns the same reference.
    pub fn get() -> &'static AppConstants {
        static CONSTANTS: AppConstants = AppConstants::CURRENT;
        &CONSTANTS
    }
}

impl Default for AppConstants {
    fn default() -> Self {
        Self::CURRENT
    }
}
