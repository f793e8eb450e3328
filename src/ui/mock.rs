//! Mock reporter implementation for testing.
//!
//! `MockReporter` implements the `StatusReporter` trait and captures
//! every report as a typed event for later assertion.
//!
//! # Example
//!
//! ```
//! use cairn::step::StepOutcome;
//! use cairn::ui::{MockReporter, StatusReporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.sequence_header("Database setup");
//! reporter.step_started("Creating database");
//! reporter.step_finished("Creating database", StepOutcome::Done);
//!
//! assert_eq!(reporter.headers(), vec!["Database setup"]);
//! assert_eq!(
//!     reporter.finished(),
//!     vec![("Creating database", StepOutcome::Done)]
//! );
//! ```

use crate::step::StepOutcome;

use super::StatusReporter;

/// One captured reporter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    /// A step started.
    Started { title: String },
    /// A step finished with an outcome.
    Finished {
        title: String,
        outcome: StepOutcome,
    },
    /// A sequence header was shown.
    Header { title: String },
}

/// Mock reporter that records every call, in order.
#[derive(Debug, Default)]
pub struct MockReporter {
    events: Vec<ReporterEvent>,
}

impl MockReporter {
    /// Create an empty mock reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured events, in call order.
    pub fn events(&self) -> &[ReporterEvent] {
        &self.events
    }

    /// Titles of started steps, in order.
    pub fn started(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReporterEvent::Started { title } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Title and outcome of finished steps, in order.
    pub fn finished(&self) -> Vec<(&str, StepOutcome)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReporterEvent::Finished { title, outcome } => Some((title.as_str(), *outcome)),
                _ => None,
            })
            .collect()
    }

    /// Captured sequence headers, in order.
    pub fn headers(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReporterEvent::Header { title } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl StatusReporter for MockReporter {
    fn step_started(&mut self, title: &str) {
        self.events.push(ReporterEvent::Started {
            title: title.to_string(),
        });
    }

    fn step_finished(&mut self, title: &str, outcome: StepOutcome) {
        self.events.push(ReporterEvent::Finished {
            title: title.to_string(),
            outcome,
        });
    }

    fn sequence_header(&mut self, title: &str) {
        self.events.push(ReporterEvent::Header {
            title: title.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_call_order() {
        let mut reporter = MockReporter::new();
        reporter.sequence_header("Setup");
        reporter.step_started("Step: a");
        reporter.step_finished("Step: a", StepOutcome::Done);
        reporter.step_started("Step: b");
        reporter.step_finished("Step: b", StepOutcome::Error);

        assert_eq!(reporter.events().len(), 5);
        assert_eq!(reporter.headers(), vec!["Setup"]);
        assert_eq!(reporter.started(), vec!["Step: a", "Step: b"]);
        assert_eq!(
            reporter.finished(),
            vec![
                ("Step: a", StepOutcome::Done),
                ("Step: b", StepOutcome::Error)
            ]
        );
    }

    #[test]
    fn new_reporter_is_empty() {
        let reporter = MockReporter::new();
        assert!(reporter.is_empty());
        assert!(reporter.events().is_empty());
    }
}
