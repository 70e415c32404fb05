//! Beat-indexed music composition model
//!
//! This crate provides the data model of a discrete-time music editor:
//! pitches, immutable notes, and a [`Score`] that stores notes indexed by
//! the beats they sound during. The store enforces de-duplication and
//! keeps its pitch extremes cached, and supports structural composition:
//! playing one piece after another ([`ScoreEdit::append`]) or on top of
//! another ([`ScoreEdit::combine`]).
//!
//! Rendering, input handling, audio playback, and file parsing are
//! external collaborators; they consume [`ScoreRead`] (optionally through
//! a [`ReadOnlyScore`]) or feed a [`ScoreBuilder`].

pub mod builder;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use builder::ScoreBuilder;
pub use error::ScoreError;
pub use models::note::Note;
pub use models::pitch::{NoteName, Pitch};
pub use models::readonly::ReadOnlyScore;
pub use models::score::{Score, ScoreEdit, ScoreRead};
