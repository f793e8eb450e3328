//! Running an ordered list of sequences.

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;
use crate::ui::StatusReporter;

/// Runs an ordered list of [`Sequence`]s against one shared configuration.
///
/// Sequences run back to back in insertion order; the first error aborts
/// the run and propagates unchanged. Gating stays each sequence's own
/// concern; the runner adds no filtering of its own, so a gated-off
/// sequence is a silent no-op within the run.
#[derive(Debug, Default)]
pub struct SequenceRunner {
    sequences: Vec<Sequence>,
}

impl SequenceRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sequence to the run order.
    pub fn add_sequence(&mut self, sequence: Sequence) {
        self.sequences.push(sequence);
    }

    /// Look up a sequence by name.
    pub fn sequence(&self, name: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.name() == name)
    }

    /// Sequences in run order.
    pub fn sequences(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.iter()
    }

    /// Run every sequence in insertion order.
    pub fn run_all(&self, config: &mut Config, reporter: &mut dyn StatusReporter) -> Result<()> {
        debug!("running {} sequences", self.sequences.len());
        for sequence in &self.sequences {
            sequence.run(config, reporter)?;
        }
        Ok(())
    }

    /// Run a single sequence by name.
    ///
    /// Unknown names fail with [`SequenceError::UnknownSequence`].
    pub fn run_sequence(
        &self,
        name: &str,
        config: &mut Config,
        reporter: &mut dyn StatusReporter,
    ) -> Result<()> {
        let sequence = self
            .sequence(name)
            .ok_or_else(|| SequenceError::UnknownSequence {
                sequence: name.to_string(),
            })?;
        sequence.run(config, reporter)
    }
}
