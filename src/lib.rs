pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod output;
pub mod parsers;
pub mod presentation;
pub mod profile;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
