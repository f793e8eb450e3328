//! Visual theme and styling.

use console::Style;

use crate::step::StepOutcome;

/// Styles for step status output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the success marker (green).
    pub success: Style,
    /// Style for the failure marker (red).
    pub failure: Style,
    /// Style for sequence headers (bold).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            failure: Style::new().red(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            failure: Style::new(),
            header: Style::new(),
        }
    }

    /// Style the marker text for an outcome.
    pub fn style_marker(&self, outcome: StepOutcome) -> String {
        let style = match outcome {
            StepOutcome::Done => &self.success,
            StepOutcome::Error => &self.failure,
        };
        style.apply_to(outcome.marker()).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Honor NO_COLOR (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_marker_is_bare_text() {
        let theme = Theme::plain();
        assert_eq!(theme.style_marker(StepOutcome::Done), "DONE");
        assert_eq!(theme.style_marker(StepOutcome::Error), "ERROR");
    }

    #[test]
    fn colored_marker_contains_text() {
        let theme = Theme::new();
        assert!(theme.style_marker(StepOutcome::Done).contains("DONE"));
        assert!(theme.style_marker(StepOutcome::Error).contains("ERROR"));
    }

    #[test]
    fn default_matches_new() {
        let default = Theme::default();
        let new = Theme::new();
        assert_eq!(
            default.style_marker(StepOutcome::Done),
            new.style_marker(StepOutcome::Done)
        );
    }
}
