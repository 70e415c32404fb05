//! Immutable note values
//!
//! A [`Note`] is a pitch sounding for a run of consecutive beats, tagged
//! with the instrument that plays it and its volume. Notes are plain
//! values: two notes with the same five fields are the same note, which
//! is what the store's duplicate detection relies on.

use crate::error::ScoreError;
use crate::models::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// An immutable musical note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pitch: Pitch,
    duration: i32,
    start_beat: i32,
    instrument: i32,
    volume: i32,
}

impl Note {
    /// Create a note
    ///
    /// Rejects negative durations and start beats. A duration of exactly 0
    /// is accepted; such a note occupies no beats and is invisible to every
    /// store query.
    pub fn new(
        pitch: Pitch,
        duration: i32,
        start_beat: i32,
        instrument: i32,
        volume: i32,
    ) -> Result<Self, ScoreError> {
        if duration < 0 {
            return Err(ScoreError::NegativeDuration(duration));
        }
        if start_beat < 0 {
            return Err(ScoreError::NegativeStartBeat(start_beat));
        }
        Ok(Self {
            pitch,
            duration,
            start_beat,
            instrument,
            volume,
        })
    }

    /// The pitch of this note
    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// How many consecutive beats this note sounds
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// The beat this note starts on
    pub fn start_beat(&self) -> i32 {
        self.start_beat
    }

    /// First beat after the note stops sounding
    pub fn end_beat(&self) -> i32 {
        self.start_beat + self.duration
    }

    /// The sound-bank instrument that plays this note
    pub fn instrument(&self) -> i32 {
        self.instrument
    }

    /// Playback volume (velocity)
    pub fn volume(&self) -> i32 {
        self.volume
    }
}
