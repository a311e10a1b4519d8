//! Notesort - rule-driven classification and ordering of notes
//!
//! This library evaluates user-configured rules against notes carrying
//! frontmatter, tags, backlinks and body text. It produces a visual
//! classification (an icon and a color, each with the id of the rule that
//! chose it) and a composite sort key that orders notes inside priority
//! buckets.
//!
//! Evaluation is pure: the engine borrows rules and contexts, reads the time
//! from an injected clock and performs no I/O.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod engine;
pub mod output;
pub mod rules;

#[cfg(test)]
pub mod testing;

pub use context::RuleEvaluationContext;
pub use engine::{Clock, RuleEngine, VisualRuleResult};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NotesortError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Note descriptors could not be read
    #[error("Invalid note data: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
