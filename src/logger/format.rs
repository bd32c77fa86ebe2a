//! Console log formatting with ANSI colors.

use chrono::Local;
use colored::*;
use std::io::{ stdout, ErrorKind, Write };

use super::tags::LogTag;

/// Tag column width for alignment
const TAG_WIDTH: usize = 8;

/// Format and print a log line to the console
pub fn format_and_print(tag: LogTag, level: &str, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_level(level),
        message
    );
    print_stdout_safe(&line);
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => padded.bright_yellow().bold(),
        LogTag::Worker => padded.bright_green().bold(),
        LogTag::Market => padded.bright_blue().bold(),
        LogTag::Chain => padded.bright_cyan().bold(),
        LogTag::Parser => padded.bright_magenta().bold(),
    }
}

fn format_level(level: &str) -> ColoredString {
    match level {
        "ERROR" => level.bright_red().bold(),
        "WARNING" => level.yellow(),
        "DEBUG" => level.dimmed(),
        _ => level.normal(),
    }
}

/// Print without panicking when stdout is a closed pipe (e.g. `flonbot | head`)
fn print_stdout_safe(line: &str) {
    let mut out = stdout();
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}
