//! Single-step execution and status outcomes.
//!
//! A [`Step`] wraps one named setup operation. Running it invokes the
//! operation exactly once against the shared configuration, reports
//! start and outcome through the status reporter, and translates any
//! operation failure into [`SequenceError::StepFailed`].

use std::fmt;

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SequenceError};
use crate::ui::StatusReporter;

/// Operation wrapped by a [`Step`].
///
/// Operations receive the shared configuration and may mutate it. Any
/// error they return is captured at the step boundary: logged in full at
/// debug level, then replaced by [`SequenceError::StepFailed`].
pub type StepFn = Box<dyn Fn(&mut Config) -> anyhow::Result<()>>;

/// Outcome of one executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The operation returned normally.
    Done,
    /// The operation failed (or the step had no operation).
    Error,
}

impl StepOutcome {
    /// Marker text shown in the status column.
    pub fn marker(&self) -> &'static str {
        match self {
            StepOutcome::Done => "DONE",
            StepOutcome::Error => "ERROR",
        }
    }

    /// Check whether this is the success outcome.
    pub fn is_done(&self) -> bool {
        matches!(self, StepOutcome::Done)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Construction record for one step.
///
/// An ordered list of descriptors is the sole structural input of the
/// engine; the layer that declares setup plans produces them.
pub struct StepDescriptor {
    /// Step name, unique within its sequence.
    pub name: String,
    /// The operation to run. A step without one fails when run.
    pub operation: Option<StepFn>,
    /// Display title; derived from the name when absent.
    pub title: Option<String>,
}

impl StepDescriptor {
    /// Create a descriptor wrapping an operation.
    pub fn new(
        name: impl Into<String>,
        operation: impl Fn(&mut Config) -> anyhow::Result<()> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            operation: Some(Box::new(operation)),
            title: None,
        }
    }

    /// Create a descriptor with no operation.
    pub fn without_operation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: None,
            title: None,
        }
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl fmt::Debug for StepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("has_operation", &self.operation.is_some())
            .finish()
    }
}

/// A single named setup operation with a display title.
///
/// Immutable once built; owned and ordered by its [`Sequence`].
///
/// [`Sequence`]: crate::sequence::Sequence
pub struct Step {
    name: String,
    title: String,
    operation: Option<StepFn>,
}

impl Step {
    /// Create a step.
    ///
    /// Fails with [`SequenceError::InvalidStep`] when `name` is empty.
    /// When `title` is absent it defaults to `"Step: <name>"`.
    pub fn new(
        name: impl Into<String>,
        operation: Option<StepFn>,
        title: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SequenceError::InvalidStep {
                message: "step name must not be empty".to_string(),
            });
        }
        let title = title.unwrap_or_else(|| format!("Step: {}", name));
        Ok(Self {
            name,
            title,
            operation,
        })
    }

    /// Build a step from its descriptor.
    pub fn from_descriptor(descriptor: StepDescriptor) -> Result<Self> {
        Self::new(descriptor.name, descriptor.operation, descriptor.title)
    }

    /// Step name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check whether this step carries an operation.
    pub fn has_operation(&self) -> bool {
        self.operation.is_some()
    }

    /// Run the wrapped operation once.
    ///
    /// Reports the start and the outcome through `reporter`. On failure
    /// the operation's error is logged at debug level and replaced by
    /// [`SequenceError::StepFailed`] carrying its string form; nothing
    /// else of the original error crosses this boundary.
    pub fn run(&self, config: &mut Config, reporter: &mut dyn StatusReporter) -> Result<()> {
        debug!("running step {}", self.name);
        reporter.step_started(&self.title);

        let outcome = match &self.operation {
            Some(operation) => operation(config).map_err(|err| {
                debug!("step {} failed: {:?}", self.name, err);
                SequenceError::StepFailed {
                    step: self.name.clone(),
                    message: err.to_string(),
                }
            }),
            None => Err(SequenceError::StepFailed {
                step: self.name.clone(),
                message: "step has no operation".to_string(),
            }),
        };

        match outcome {
            Ok(()) => {
                reporter.step_finished(&self.title, StepOutcome::Done);
                Ok(())
            }
            Err(err) => {
                reporter.step_finished(&self.title, StepOutcome::Error);
                Err(err)
            }
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("has_operation", &self.operation.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::ui::{MockReporter, ReporterEvent};

    #[test]
    fn title_defaults_to_derived_string() {
        let step = Step::new("install", None, None).unwrap();
        assert_eq!(step.title(), "Step: install");
    }

    #[test]
    fn explicit_title_is_kept() {
        let step = Step::new("install", None, Some("Installing packages".into())).unwrap();
        assert_eq!(step.title(), "Installing packages");
    }

    #[test]
    fn empty_name_fails_construction() {
        let err = Step::new("", None, None).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidStep { .. }));

        let err = Step::new("   ", None, None).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidStep { .. }));
    }

    #[test]
    fn run_invokes_operation_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let step = Step::new(
            "count",
            Some(Box::new(move |_: &mut Config| {
                counter.set(counter.get() + 1);
                Ok(())
            })),
            None,
        )
        .unwrap();

        let mut config = Config::new();
        let mut reporter = MockReporter::new();
        step.run(&mut config, &mut reporter).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn successful_run_reports_done() {
        let step = Step::new("ok", Some(Box::new(|_: &mut Config| Ok(()))), None).unwrap();

        let mut config = Config::new();
        let mut reporter = MockReporter::new();
        step.run(&mut config, &mut reporter).unwrap();

        assert_eq!(
            reporter.events(),
            &[
                ReporterEvent::Started {
                    title: "Step: ok".into()
                },
                ReporterEvent::Finished {
                    title: "Step: ok".into(),
                    outcome: StepOutcome::Done
                },
            ]
        );
    }

    #[test]
    fn failing_run_reports_error_and_normalizes() {
        let step = Step::new(
            "broken",
            Some(Box::new(|_: &mut Config| anyhow::bail!("disk full"))),
            None,
        )
        .unwrap();

        let mut config = Config::new();
        let mut reporter = MockReporter::new();
        let err = step.run(&mut config, &mut reporter).unwrap_err();

        match err {
            SequenceError::StepFailed { step, message } => {
                assert_eq!(step, "broken");
                assert_eq!(message, "disk full");
            }
            other => panic!("expected StepFailed, got {:?}", other),
        }
        assert_eq!(
            reporter.finished(),
            vec![("Step: broken", StepOutcome::Error)]
        );
    }

    #[test]
    fn step_without_operation_fails_at_run_time() {
        let step = Step::new("noop", None, None).unwrap();

        let mut config = Config::new();
        let mut reporter = MockReporter::new();
        let err = step.run(&mut config, &mut reporter).unwrap_err();

        assert!(matches!(err, SequenceError::StepFailed { .. }));
        assert_eq!(reporter.finished(), vec![("Step: noop", StepOutcome::Error)]);
    }

    #[test]
    fn operation_can_mutate_config() {
        let step = Step::new(
            "write",
            Some(Box::new(|config: &mut Config| {
                config.set("written", "yes");
                Ok(())
            })),
            None,
        )
        .unwrap();

        let mut config = Config::new();
        let mut reporter = MockReporter::new();
        step.run(&mut config, &mut reporter).unwrap();
        assert_eq!(config.get("written"), Some("yes"));
    }

    #[test]
    fn outcome_markers() {
        assert_eq!(StepOutcome::Done.marker(), "DONE");
        assert_eq!(StepOutcome::Error.marker(), "ERROR");
        assert!(StepOutcome::Done.is_done());
        assert!(!StepOutcome::Error.is_done());
        assert_eq!(format!("{}", StepOutcome::Done), "DONE");
    }

    #[test]
    fn descriptor_builds_step_with_title() {
        let descriptor = StepDescriptor::new("db", |_: &mut Config| Ok(()))
            .with_title("Setting up database");
        let step = Step::from_descriptor(descriptor).unwrap();
        assert_eq!(step.name(), "db");
        assert_eq!(step.title(), "Setting up database");
        assert!(step.has_operation());
    }

    #[test]
    fn descriptor_without_operation() {
        let descriptor = StepDescriptor::without_operation("later");
        assert!(descriptor.operation.is_none());
        let step = Step::from_descriptor(descriptor).unwrap();
        assert!(!step.has_operation());
    }
}
