//! Terminal reporter with column-aligned outcome markers.

use std::io::Write;

use console::measure_text_width;

use crate::step::StepOutcome;

use super::theme::{should_use_colors, Theme};
use super::StatusReporter;

/// Column the outcome marker's right edge aligns to.
pub const STATUS_COLUMN: usize = 70;

/// Reports step progress to process stdout.
///
/// Each step produces exactly two writes: the title fragment (with a
/// trailing `...`, no newline) and the outcome fragment that completes
/// the line. Padding is computed on visible width (color escapes are
/// stripped before measuring), so alignment holds when titles or markers
/// carry colors. Each write is flushed immediately; the display is
/// incremental.
pub struct TerminalReporter {
    theme: Theme,
}

impl TerminalReporter {
    /// Create a reporter, picking colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme }
    }

    /// Create a reporter that never colors its output.
    pub fn plain() -> Self {
        Self {
            theme: Theme::plain(),
        }
    }

    /// Create a reporter with a specific theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for TerminalReporter {
    fn step_started(&mut self, title: &str) {
        print!("{}", format_start(title));
        let _ = std::io::stdout().flush();
    }

    fn step_finished(&mut self, title: &str, outcome: StepOutcome) {
        print!("{}", format_outcome(title, outcome, &self.theme));
        let _ = std::io::stdout().flush();
    }

    fn sequence_header(&mut self, title: &str) {
        println!("{}", self.theme.header.apply_to(title));
        let _ = std::io::stdout().flush();
    }
}

/// Format the start fragment for a step title.
fn format_start(title: &str) -> String {
    format!("{}...", title)
}

/// Format the outcome fragment that completes a step line.
///
/// The `[ DONE ]` / `[ ERROR ]` marker is right-aligned so its closing
/// bracket lands at [`STATUS_COLUMN`], measured against the title's
/// visible width.
fn format_outcome(title: &str, outcome: StepOutcome, theme: &Theme) -> String {
    let state = format!("[ {} ]", theme.style_marker(outcome));
    let pad = STATUS_COLUMN.saturating_sub(measure_text_width(title));
    let fill = pad.saturating_sub(measure_text_width(&state));
    format!("{}{}\n", " ".repeat(fill), state)
}
