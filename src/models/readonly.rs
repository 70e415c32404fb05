//! Read-only view over a composition
//!
//! Hands the query surface of a live score to consumers (renderers,
//! players) that must not mutate it. The view holds no state of its own;
//! every read is forwarded to the wrapped score, so it always reflects
//! the owner's latest edits.

use crate::error::ScoreError;
use crate::models::note::Note;
use crate::models::pitch::Pitch;
use crate::models::score::{ScoreEdit, ScoreRead};
use std::collections::{BTreeMap, HashSet};

/// A borrowing view exposing only the query surface of a score
///
/// The view also implements [`ScoreEdit`] so it can stand in anywhere the
/// full capability is expected, but every mutator fails with
/// [`ScoreError::ReadOnly`] without touching the underlying score.
pub struct ReadOnlyScore<'a> {
    score: &'a dyn ScoreRead,
}

impl<'a> ReadOnlyScore<'a> {
    /// Wrap a score in a read-only view
    pub fn new(score: &'a dyn ScoreRead) -> Self {
        Self { score }
    }
}

impl ScoreRead for ReadOnlyScore<'_> {
    fn tempo(&self) -> i32 {
        self.score.tempo()
    }

    fn beats_per_measure(&self) -> i32 {
        self.score.beats_per_measure()
    }

    fn notes(&self) -> BTreeMap<i32, HashSet<Note>> {
        self.score.notes()
    }

    fn notes_at(&self, beat: i32) -> Result<HashSet<Note>, ScoreError> {
        self.score.notes_at(beat)
    }

    fn low_pitch(&self) -> Option<Pitch> {
        self.score.low_pitch()
    }

    fn high_pitch(&self) -> Option<Pitch> {
        self.score.high_pitch()
    }
}

impl ScoreEdit for ReadOnlyScore<'_> {
    fn set_tempo(&mut self, _tempo: i32) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }

    fn set_beats_per_measure(&mut self, _beats_per_measure: i32) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }

    fn clear(&mut self) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }

    fn add_note(&mut self, _note: Note) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }

    fn remove_note(&mut self, _note: &Note) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }

    fn replace_note(&mut self, _old: &Note, _new: Note) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }

    fn append(&mut self, _other: &dyn ScoreRead) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }

    fn combine(&mut self, _other: &dyn ScoreRead) -> Result<(), ScoreError> {
        Err(ScoreError::ReadOnly)
    }
}
