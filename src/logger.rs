//! Tracing setup for the bot binary

use std::fs::File;

use anyhow::Context;
use time::{
    format_description::{self, parse},
    OffsetDateTime, UtcOffset,
};
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::{
    fmt::{time::OffsetTime, writer::BoxMakeWriter},
    FmtSubscriber,
};

use crate::configuration::Configuration;

/// Install the global tracing subscriber.
///
/// Logs go to a timestamped file in the current directory when `config.log` is set, to stderr
/// otherwise. Fails if a global subscriber is already installed.
pub fn init_logger(config: &Configuration) -> anyhow::Result<()> {
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let writer = if config.log {
        let file_name = get_log_file_name()?;
        let file = File::create(&file_name)
            .with_context(|| format!("could not create log file '{file_name}'"))?;
        BoxMakeWriter::new(file)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    // local offset is unavailable in some multi-threaded contexts
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = OffsetTime::new(
        local_offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")?,
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(writer)
        .finish();

    set_global_default(subscriber).context(
        "could not set global default tracing subscriber, one is probably already installed",
    )
}

fn get_log_file_name() -> anyhow::Result<String> {
    let format = parse("[year]-[month]-[day]_[hour]:[minute]:[second]_log.txt")?;
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    Ok(now.format(&format)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_name() {
        let name = get_log_file_name().unwrap();
        assert!(name.ends_with("_log.txt"), "{name}");
        // yyyy-mm-dd_hh:mm:ss_log.txt
        assert_eq!(name.len(), 27, "{name}");
    }
}
