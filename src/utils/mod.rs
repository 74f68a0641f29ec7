pub mod browser;

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use console::style;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};
use tabwriter::TabWriter;

pub fn set_hook() {
    // setup a panic hook to easily exit the program on panic
    std::panic::set_hook(Box::new(|panic_info| {
        // print the panic message
        let message = if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            format!("{panic_info:?}")
        };

        // add some color
        log::error!("{message}");

        #[cfg(debug_assertions)]
        log::debug!("{panic_info}");

        std::process::exit(1);
    }));

    ctrlc::set_handler(|| {
        // dialoguer hides the cursor while prompting
        clean_term();
        std::process::exit(0);
    })
    .ok();
}

pub fn clean_term() {
    let term = console::Term::stdout();

    // if the terminal is a tty, clear the screen and reset the cursor
    if term.is_term() {
        term.show_cursor().ok();
    }
}

pub fn logs(verbose: bool) {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .debug(Color::BrightWhite);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();

            match level {
                Level::Debug => out.finish(format_args!(
                    "{} [{}]: {}",
                    colors.color(Level::Debug).to_string().to_lowercase(),
                    record.target(),
                    message
                )),

                level => out.finish(format_args!(
                    "{}: {}",
                    colors.color(level).to_string().to_lowercase(),
                    message
                )),
            }
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        // keep dependency chatter out of verbose output
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| !matches!(metadata.level(), Level::Error | Level::Warn))
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(log::LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .apply()
        .ok();
}

pub fn urlify(s: &str) -> String {
    style(s).bold().underlined().to_string()
}

pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

/// Lines of a tab aligned table, header first when given.
pub fn table(header: Option<&str>, rows: impl IntoIterator<Item = String>) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if let Some(header) = header {
        writeln!(tw, "{header}")?;
    }

    for row in rows {
        writeln!(tw, "{row}")?;
    }

    let buffer = tw
        .into_inner()
        .map_err(|_| anyhow!("Failed to flush table"))?;

    Ok(String::from_utf8(buffer)?
        .lines()
        .map(std::string::ToString::to_string)
        .collect())
}

/// Korea Standard Time, the timezone of every lecture.
const KST_OFFSET: i32 = 9 * 3600;

/// Renders a server timestamp in KST. Naive timestamps are UTC.
pub fn format_kst(timestamp: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .map(|date| date.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Utc.from_utc_datetime(&naive))
        });

    match (parsed, FixedOffset::east_opt(KST_OFFSET)) {
        (Ok(date), Some(kst)) => date
            .with_timezone(&kst)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        _ => timestamp.to_string(),
    }
}
