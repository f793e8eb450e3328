//! Ordered step collections with conditional gating.

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SequenceError};
use crate::step::{Step, StepDescriptor};
use crate::ui::StatusReporter;

/// An ordered, uniquely-named collection of [`Step`]s.
///
/// Steps run in insertion order. When two descriptors share a name, the
/// later one wins but keeps the earlier one's position in the order.
///
/// A sequence may be gated on a configuration value: when a condition
/// key is set, the sequence runs only while the configuration's value
/// for that key equals the expected match. A failed gate is a silent
/// no-op: no output, no log, no step executed.
///
/// The structure is immutable once built, but a sequence may be run any
/// number of times, each with its own configuration.
#[derive(Debug)]
pub struct Sequence {
    name: String,
    title: Option<String>,
    condition: Option<String>,
    cond_match: Option<String>,
    steps: Vec<Step>,
}

impl Sequence {
    /// Build a sequence from step descriptors, in list order.
    ///
    /// Step construction errors propagate unchanged.
    pub fn new(name: impl Into<String>, descriptors: Vec<StepDescriptor>) -> Result<Self> {
        let mut steps: Vec<Step> = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let step = Step::from_descriptor(descriptor)?;
            // Duplicate names: last write wins, keeps the original position.
            match steps.iter().position(|s| s.name() == step.name()) {
                Some(index) => steps[index] = step,
                None => steps.push(step),
            }
        }
        Ok(Self {
            name: name.into(),
            title: None,
            condition: None,
            cond_match: None,
            steps,
        })
    }

    /// Set the header reported once before the steps run.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Gate the sequence on a configuration value.
    ///
    /// The sequence then runs only when the configuration's value for
    /// `condition` equals `cond_match` (exact equality, no coercion).
    pub fn with_condition(
        mut self,
        condition: impl Into<String>,
        cond_match: impl Into<String>,
    ) -> Self {
        self.condition = Some(condition.into());
        self.cond_match = Some(cond_match.into());
        self
    }

    /// Sequence name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Look up a step by name.
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name() == name)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check whether the gate lets this sequence run.
    ///
    /// Always true when no condition is set; otherwise true iff the
    /// configuration's value for the condition key equals the expected
    /// match. Pure; no side effects.
    pub fn validate_condition(&self, config: &Config) -> bool {
        match &self.condition {
            None => true,
            Some(key) => config.get(key) == self.cond_match.as_deref(),
        }
    }

    /// Run every step in insertion order.
    ///
    /// A failed gate returns `Ok(())` immediately with no output. The
    /// first failing step aborts the iteration and its error propagates
    /// unchanged; steps after it do not run.
    pub fn run(&self, config: &mut Config, reporter: &mut dyn StatusReporter) -> Result<()> {
        if !self.validate_condition(config) {
            return Ok(());
        }
        debug!("running sequence {}", self.name);
        if let Some(title) = &self.title {
            reporter.sequence_header(title);
        }
        for step in &self.steps {
            step.run(config, reporter)?;
        }
        Ok(())
    }

    /// Run a single step by name, leaving the others untouched.
    ///
    /// The gate is still evaluated first; a failed gate is a silent
    /// `Ok(())`. No header is reported. Unknown names fail with
    /// [`SequenceError::UnknownStep`].
    pub fn run_step(
        &self,
        step: &str,
        config: &mut Config,
        reporter: &mut dyn StatusReporter,
    ) -> Result<()> {
        if !self.validate_condition(config) {
            return Ok(());
        }
        let found = self.step(step).ok_or_else(|| SequenceError::UnknownStep {
            sequence: self.name.clone(),
            step: step.to_string(),
        })?;
        found.run(config, reporter)
    }
}
