//! Status reporting for step execution.
//!
//! This module provides:
//! - [`StatusReporter`] trait for progress-reporting abstraction
//! - [`TerminalReporter`] for real terminal output
//! - [`MockReporter`] for capturing reports in tests
//! - [`Theme`] styling for the status markers
//!
//! # Example
//!
//! ```
//! use cairn::step::StepOutcome;
//! use cairn::ui::{MockReporter, StatusReporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.step_started("Installing packages");
//! reporter.step_finished("Installing packages", StepOutcome::Done);
//! assert_eq!(reporter.started(), vec!["Installing packages"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::{MockReporter, ReporterEvent};
pub use terminal::{TerminalReporter, STATUS_COLUMN};
pub use theme::{should_use_colors, Theme};

use crate::step::StepOutcome;

/// Trait for reporting step progress.
///
/// The engine never writes to stdout itself; everything user-visible
/// goes through this trait, which allows capturing output in tests.
pub trait StatusReporter {
    /// A step is about to run. The terminal pairs this with a later
    /// outcome on the same visual line.
    fn step_started(&mut self, title: &str);

    /// The step finished with the given outcome.
    fn step_finished(&mut self, title: &str, outcome: StepOutcome);

    /// A titled sequence is about to run its steps.
    fn sequence_header(&mut self, title: &str);
}
