//! The beat-indexed composition store
//!
//! A [`Score`] maps each beat number to the set of notes sounding during
//! that beat: a note with duration `d` starting at beat `s` appears in
//! every bucket of `s..s+d`. Buckets are backed by sets, so inserting a
//! note equal to one already present is a silent no-op, and a bucket
//! exists only while it holds at least one note.
//!
//! The query and mutation surfaces are split into [`ScoreRead`] and
//! [`ScoreEdit`] so consumers that only render or play a composition can
//! be handed a capability that cannot change it (see
//! [`ReadOnlyScore`](crate::models::readonly::ReadOnlyScore)).

use crate::error::ScoreError;
use crate::models::note::Note;
use crate::models::pitch::Pitch;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Tempo a fresh or cleared score starts with, in time units per beat
pub const DEFAULT_TEMPO: i32 = 60;

/// Beats per measure a fresh or cleared score starts with
pub const DEFAULT_BEATS_PER_MEASURE: i32 = 4;

/// Query surface of a composition
///
/// Everything a renderer or player needs: the beat map, per-beat lookups,
/// the cached pitch extremes, and the timing metadata.
pub trait ScoreRead {
    /// Tempo in time units per beat
    fn tempo(&self) -> i32;

    /// Beats per measure, for display grouping
    fn beats_per_measure(&self) -> i32;

    /// Snapshot of the beat map, ordered by beat ascending
    ///
    /// Beats absent from the result hold no notes. The returned map is an
    /// independent copy; mutating it does not touch the composition.
    fn notes(&self) -> BTreeMap<i32, HashSet<Note>>;

    /// The notes sounding during the given beat
    ///
    /// Returns an empty set for an unoccupied beat and an error for a
    /// negative one.
    fn notes_at(&self, beat: i32) -> Result<HashSet<Note>, ScoreError>;

    /// Lowest pitch over all stored notes, or `None` when empty
    fn low_pitch(&self) -> Option<Pitch>;

    /// Highest pitch over all stored notes, or `None` when empty
    fn high_pitch(&self) -> Option<Pitch>;
}

/// Mutation surface of a composition
///
/// Every method reports contract violations through [`ScoreError`] before
/// touching any state; a failed call leaves the composition unchanged.
pub trait ScoreEdit: ScoreRead {
    /// Set the tempo; must be at least 1
    fn set_tempo(&mut self, tempo: i32) -> Result<(), ScoreError>;

    /// Set the beats per measure; must be at least 1
    fn set_beats_per_measure(&mut self, beats_per_measure: i32) -> Result<(), ScoreError>;

    /// Start a new piece: drop all notes, restore default tempo and meter
    fn clear(&mut self) -> Result<(), ScoreError>;

    /// Add a note to every beat it sounds during
    ///
    /// A note equal to one already stored (same pitch, duration, start
    /// beat, instrument, and volume) is absorbed without effect.
    fn add_note(&mut self, note: Note) -> Result<(), ScoreError>;

    /// Remove a previously added note
    ///
    /// The note must match a stored note on all five fields; existence is
    /// checked at the start beat's bucket only.
    fn remove_note(&mut self, note: &Note) -> Result<(), ScoreError>;

    /// Remove `old` and add `new` in one step
    ///
    /// If `new` duplicates a stored note it is absorbed, so a replace can
    /// net-decrease the note count.
    fn replace_note(&mut self, old: &Note, new: Note) -> Result<(), ScoreError>;

    /// Play `other` after this composition
    ///
    /// Every note of `other` is shifted forward past this composition's
    /// last occupied beat and added. `other`'s tempo and meter are
    /// discarded.
    fn append(&mut self, other: &dyn ScoreRead) -> Result<(), ScoreError>;

    /// Play `other` together with this composition
    ///
    /// Every note of `other` is added unshifted, overlaying the two
    /// compositions from beat 0. `other`'s tempo and meter are discarded.
    fn combine(&mut self, other: &dyn ScoreRead) -> Result<(), ScoreError>;
}

/// The composition store
///
/// Pitch extremes are cached: inserts update them with a single compare,
/// while removing a note that held an extreme rescans the remaining notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    notes: BTreeMap<i32, HashSet<Note>>,
    lowest: Option<Pitch>,
    highest: Option<Pitch>,
    tempo: i32,
    beats_per_measure: i32,
}

impl Score {
    /// Create an empty score with default tempo and meter
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            lowest: None,
            highest: None,
            tempo: DEFAULT_TEMPO,
            beats_per_measure: DEFAULT_BEATS_PER_MEASURE,
        }
    }

    /// Highest beat currently holding a note, or `None` when empty
    pub fn last_occupied_beat(&self) -> Option<i32> {
        self.notes.keys().next_back().copied()
    }

    /// Drop a bucket once its last note is gone
    fn prune_beat(&mut self, beat: i32) {
        if self.notes.get(&beat).is_some_and(|bucket| bucket.is_empty()) {
            self.notes.remove(&beat);
        }
    }

    /// Recompute both cached extremes from the full note population
    fn rescan_extremes(&mut self) {
        let mut low: Option<Pitch> = None;
        let mut high: Option<Pitch> = None;

        for bucket in self.notes.values() {
            for note in bucket {
                let pitch = note.pitch();
                if low.map_or(true, |l| pitch < l) {
                    low = Some(pitch);
                }
                if high.map_or(true, |h| pitch > h) {
                    high = Some(pitch);
                }
            }
        }

        self.lowest = low;
        self.highest = high;
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRead for Score {
    fn tempo(&self) -> i32 {
        self.tempo
    }

    fn beats_per_measure(&self) -> i32 {
        self.beats_per_measure
    }

    fn notes(&self) -> BTreeMap<i32, HashSet<Note>> {
        self.notes.clone()
    }

    fn notes_at(&self, beat: i32) -> Result<HashSet<Note>, ScoreError> {
        if beat < 0 {
            return Err(ScoreError::NegativeBeat(beat));
        }
        Ok(self.notes.get(&beat).cloned().unwrap_or_default())
    }

    fn low_pitch(&self) -> Option<Pitch> {
        self.lowest
    }

    fn high_pitch(&self) -> Option<Pitch> {
        self.highest
    }
}

impl ScoreEdit for Score {
    fn set_tempo(&mut self, tempo: i32) -> Result<(), ScoreError> {
        if tempo < 1 {
            return Err(ScoreError::NonPositiveTempo(tempo));
        }
        self.tempo = tempo;
        Ok(())
    }

    fn set_beats_per_measure(&mut self, beats_per_measure: i32) -> Result<(), ScoreError> {
        if beats_per_measure < 1 {
            return Err(ScoreError::NonPositiveMeter(beats_per_measure));
        }
        self.beats_per_measure = beats_per_measure;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ScoreError> {
        self.notes.clear();
        self.lowest = None;
        self.highest = None;
        self.tempo = DEFAULT_TEMPO;
        self.beats_per_measure = DEFAULT_BEATS_PER_MEASURE;
        log::debug!("score cleared to defaults");
        Ok(())
    }

    fn add_note(&mut self, note: Note) -> Result<(), ScoreError> {
        for beat in note.start_beat()..note.end_beat() {
            self.notes.entry(beat).or_default().insert(note);
        }

        // A zero-duration note occupies no beats and must stay invisible
        // to the extremes.
        if note.duration() == 0 {
            log::debug!("zero-duration note {} at beat {} is inert", note.pitch(), note.start_beat());
            return Ok(());
        }

        let pitch = note.pitch();
        if self.lowest.map_or(true, |low| pitch < low) {
            self.lowest = Some(pitch);
        }
        if self.highest.map_or(true, |high| pitch > high) {
            self.highest = Some(pitch);
        }

        log::debug!(
            "added {} at beat {} for {} beats",
            pitch,
            note.start_beat(),
            note.duration()
        );
        Ok(())
    }

    fn remove_note(&mut self, note: &Note) -> Result<(), ScoreError> {
        // Existence is judged at the start-beat bucket only; a note whose
        // later buckets were somehow disturbed is still considered present.
        let present = self
            .notes
            .get(&note.start_beat())
            .is_some_and(|bucket| bucket.contains(note));
        if !present {
            return Err(ScoreError::NoteNotFound(note.start_beat()));
        }

        for beat in note.start_beat()..note.end_beat() {
            if let Some(bucket) = self.notes.get_mut(&beat) {
                bucket.remove(note);
            }
            self.prune_beat(beat);
        }

        if self.lowest == Some(note.pitch()) || self.highest == Some(note.pitch()) {
            self.rescan_extremes();
        }

        log::debug!("removed {} at beat {}", note.pitch(), note.start_beat());
        Ok(())
    }

    fn replace_note(&mut self, old: &Note, new: Note) -> Result<(), ScoreError> {
        self.remove_note(old)?;
        self.add_note(new)
    }

    fn append(&mut self, other: &dyn ScoreRead) -> Result<(), ScoreError> {
        let offset = self.last_occupied_beat().map_or(0, |last| last + 1);

        for bucket in other.notes().values() {
            for note in bucket {
                let shifted = Note::new(
                    note.pitch(),
                    note.duration(),
                    note.start_beat() + offset,
                    note.instrument(),
                    note.volume(),
                )?;
                self.add_note(shifted)?;
            }
        }

        log::debug!("appended composition at beat offset {}", offset);
        Ok(())
    }

    fn combine(&mut self, other: &dyn ScoreRead) -> Result<(), ScoreError> {
        for bucket in other.notes().values() {
            for note in bucket {
                self.add_note(*note)?;
            }
        }

        log::debug!("combined composition from beat 0");
        Ok(())
    }
}
