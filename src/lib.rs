//! Cairn - ordered setup-step sequencing with per-step status reporting.
//!
//! Cairn turns a declared list of setup operations into controlled,
//! observable execution: steps grouped into named sequences, sequences
//! optionally gated on configuration values, everything run in
//! declaration order with a DONE/ERROR status line per step and a hard
//! stop at the first failure.
//!
//! # Modules
//!
//! - [`config`] - Shared setup configuration passed through every step
//! - [`error`] - Error types and result alias
//! - [`runner`] - Running an ordered list of sequences
//! - [`sequence`] - Ordered step collections with conditional gating
//! - [`step`] - Single-step execution and status outcomes
//! - [`ui`] - Status reporting: terminal output and a test mock
//!
//! # Example
//!
//! ```
//! use cairn::config::Config;
//! use cairn::sequence::Sequence;
//! use cairn::step::StepDescriptor;
//! use cairn::ui::MockReporter;
//!
//! let sequence = Sequence::new(
//!     "database",
//!     vec![
//!         StepDescriptor::new("create", |config: &mut Config| {
//!             config.set("db_created", "yes");
//!             Ok(())
//!         })
//!         .with_title("Creating database"),
//!     ],
//! )
//! .unwrap()
//! .with_title("Database setup");
//!
//! let mut config = Config::new();
//! let mut reporter = MockReporter::new();
//! sequence.run(&mut config, &mut reporter).unwrap();
//! assert_eq!(config.get("db_created"), Some("yes"));
//! ```
//!
//! Replace [`MockReporter`](ui::MockReporter) with
//! [`TerminalReporter`](ui::TerminalReporter) to get the incremental
//! `title...                [ DONE ]` display on stdout.

pub mod config;
pub mod error;
pub mod runner;
pub mod sequence;
pub mod step;
pub mod ui;

pub use error::{Result, SequenceError};
