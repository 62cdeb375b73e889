pub mod config;
pub mod i18n;
pub mod render;
pub mod session;

pub use config::CliConfig;
pub use session::{Command, CommandError, Session};
