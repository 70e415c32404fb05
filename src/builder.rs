//! Import adapter for parsed note streams
//!
//! External format parsers (text, MIDI, whatever the host supports) emit
//! a stream of `(start, end, instrument, pitch_code, volume)` tuples plus
//! a tempo; [`ScoreBuilder`] turns that stream into a populated [`Score`].
//! No validation happens here beyond what the model itself enforces, so a
//! malformed tuple surfaces as the same [`ScoreError`] the model raises.

use crate::error::ScoreError;
use crate::models::note::Note;
use crate::models::pitch::Pitch;
use crate::models::score::{Score, ScoreEdit, DEFAULT_TEMPO};

#[derive(Debug, Clone, Copy)]
struct RawNote {
    start: i32,
    end: i32,
    instrument: i32,
    pitch_code: i32,
    volume: i32,
}

/// Fluent builder turning note tuples into a score
pub struct ScoreBuilder {
    tempo: i32,
    notes: Vec<RawNote>,
}

impl ScoreBuilder {
    /// Start a builder with the default tempo and no notes
    pub fn new() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            notes: Vec::new(),
        }
    }

    /// Set the tempo of the score being built
    pub fn tempo(mut self, tempo: i32) -> Self {
        self.tempo = tempo;
        self
    }

    /// Queue a note tuple
    ///
    /// `end` is exclusive, so the note's duration is `end - start`.
    /// `pitch_code` is a MIDI code in 0..=127.
    pub fn note(mut self, start: i32, end: i32, instrument: i32, pitch_code: i32, volume: i32) -> Self {
        self.notes.push(RawNote {
            start,
            end,
            instrument,
            pitch_code,
            volume,
        });
        self
    }

    /// Build the score, surfacing any tuple fault as a model error
    pub fn build(self) -> Result<Score, ScoreError> {
        let mut score = Score::new();
        score.set_tempo(self.tempo)?;

        for raw in self.notes {
            let pitch = Pitch::from_midi(raw.pitch_code)?;
            let note = Note::new(
                pitch,
                raw.end - raw.start,
                raw.start,
                raw.instrument,
                raw.volume,
            )?;
            score.add_note(note)?;
        }

        Ok(score)
    }
}

impl Default for ScoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
