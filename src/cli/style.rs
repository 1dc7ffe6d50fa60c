use std::io::IsTerminal;

use colored::{Color, Colorize};

use crate::domain::StockStatus;

/// Row emphasis, mapped to a color when color output is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warn,
    Bad,
}

impl From<StockStatus> for Tone {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::Critical => Tone::Bad,
            StockStatus::Attention => Tone::Warn,
            StockStatus::Adequate => Tone::Good,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiStyle {
    pub use_color: bool,
    pub horizontal: char,
    pub color_header: Color,
}

impl UiStyle {
    /// Color only when stdout is a terminal, `NO_COLOR` is unset, and the config allows it.
    pub fn detect(color_enabled: bool) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::with_color(color_enabled && stdout_tty && !no_color)
    }

    pub fn with_color(use_color: bool) -> Self {
        Self {
            use_color,
            horizontal: '─',
            color_header: Color::BrightBlue,
        }
    }

    pub fn plain() -> Self {
        Self::with_color(false)
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(40))
    }

    pub fn header(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_header).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn tone(&self, text: &str, tone: Tone) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match tone {
            Tone::Good => text.green().to_string(),
            Tone::Warn => text.bright_yellow().to_string(),
            Tone::Bad => text.bright_red().bold().to_string(),
        }
    }
}
