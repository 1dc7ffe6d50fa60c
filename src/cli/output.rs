use colored::Colorize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Warning,
    Error,
}

static USE_COLOR: AtomicBool = AtomicBool::new(false);

pub fn set_color(enabled: bool) {
    USE_COLOR.store(enabled, Ordering::Relaxed);
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Warning => "WARNING",
        MessageKind::Error => "ERROR",
    }
}

pub(crate) fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    color: bool,
) -> String {
    let formatted = format!("{}: {}", label(kind), message);
    if !color {
        return formatted;
    }
    match kind {
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
    }
}

/// Diagnostics go to stderr so report output on stdout stays parseable.
pub fn print(kind: MessageKind, message: impl fmt::Display) {
    eprintln!(
        "{}",
        format_message(kind, message, USE_COLOR.load(Ordering::Relaxed))
    );
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}
