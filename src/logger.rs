//! Logging setup via tracing-subscriber.
//!
//! Logs go to stderr; stdout belongs to the console conversation. The
//! configured level is the default directive, and `RUST_LOG` directives
//! (e.g. `gyt_assistant::knowledge=trace`) refine it per target.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber at `level`. Call once, after config is resolved.
pub fn init(level: &str) -> Result<(), AppError> {
    let default = parse_level(level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("subscriber already installed: {e}")))
}

/// A bare level name (`error` … `trace`, or `off`). Per-target directives
/// belong in `RUST_LOG`, not in the config file.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    let level = level.trim();
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("TRACE").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::WARN);
    }

    #[test]
    fn directives_and_junk_are_rejected() {
        assert!(parse_level("gyt_assistant=debug").is_err());
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn init_rejects_bad_level_before_installing() {
        assert!(matches!(init("loud"), Err(AppError::Logger(msg)) if msg.contains("loud")));
    }
}
