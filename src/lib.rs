pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_uri;
pub mod io;
pub mod output;
pub mod svg;
pub mod verify;

pub use constants::{AppConstants, BANNER, LOGO, MESSAGE_TIMEOUT, PAGE_SIZE};
