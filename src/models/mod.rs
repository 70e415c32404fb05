//! Data models for the composition store
//!
//! This module contains the value types (pitches, notes) and the
//! beat-indexed store they live in, plus the read-only view handed to
//! non-mutating consumers.

pub mod note;
pub mod pitch;
pub mod readonly;
pub mod score;

// Re-export commonly used types
pub use note::Note;
pub use pitch::{NoteName, Pitch};
pub use readonly::ReadOnlyScore;
pub use score::{Score, ScoreEdit, ScoreRead, DEFAULT_BEATS_PER_MEASURE, DEFAULT_TEMPO};
