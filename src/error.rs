//! Error types for the composition model
//!
//! Every fallible operation in the crate reports through [`ScoreError`].
//! All errors are contract violations detected synchronously, before any
//! state is mutated; the model performs no I/O and has no transient
//! failure class.

use thiserror::Error;

/// Top-level error type for the composition model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Tempo must be at least 1
    #[error("tempo must be positive, got {0}")]
    NonPositiveTempo(i32),

    /// Beats per measure must be at least 1
    #[error("beats per measure must be positive, got {0}")]
    NonPositiveMeter(i32),

    /// Notes cannot sound for a negative number of beats
    #[error("note duration cannot be negative, got {0}")]
    NegativeDuration(i32),

    /// Notes cannot start before the beginning of the piece
    #[error("start beat cannot be negative, got {0}")]
    NegativeStartBeat(i32),

    /// Beat indices are counted from 0
    #[error("beat index cannot be negative, got {0}")]
    NegativeBeat(i32),

    /// MIDI pitch codes span 0..=127
    #[error("pitch code {0} is outside the MIDI range 0..=127")]
    PitchCodeOutOfRange(i32),

    /// No stored note matches at the claimed start beat
    #[error("no matching note at beat {0}")]
    NoteNotFound(i32),

    /// A mutator was invoked through a read-only view
    #[error("read-only view cannot modify the score")]
    ReadOnly,
}
