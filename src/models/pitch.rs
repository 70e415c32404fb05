//! Chromatic pitch representation
//!
//! A [`Pitch`] pairs one of the twelve chromatic note names with an octave
//! number. Ordering is octave-major: every pitch in octave 5 sorts above
//! every pitch in octave 4, and within an octave the chromatic order
//! C, C#, D, ... B decides.

use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The twelve chromatic note names, in semitone order within an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl NoteName {
    /// All note names in chromatic order
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Display symbol for this note name (e.g. "C#", "A")
    pub fn symbol(&self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
        }
    }

    /// Semitone offset within the octave (C = 0 .. B = 11)
    pub fn semitone(&self) -> i32 {
        *self as i32
    }

    /// The next name up, wrapping from B back to C
    pub fn next(&self) -> NoteName {
        NoteName::ALL[(*self as usize + 1) % 12]
    }
}

/// A chromatic note name anchored to an octave
///
/// Octaves are unbounded integers; display layouts nominally use 1..=10
/// but the model does not enforce a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    name: NoteName,
    octave: i32,
}

impl Pitch {
    /// Create a pitch from a note name and octave
    pub fn new(name: NoteName, octave: i32) -> Self {
        Self { name, octave }
    }

    /// Convert a MIDI pitch code (0..=127) to a pitch
    ///
    /// Code `n` maps to octave `n / 12 - 1` and chromatic step `n % 12`,
    /// so code 60 is C4.
    pub fn from_midi(code: i32) -> Result<Self, ScoreError> {
        if !(0..=127).contains(&code) {
            return Err(ScoreError::PitchCodeOutOfRange(code));
        }
        Ok(Self {
            name: NoteName::ALL[(code % 12) as usize],
            octave: code / 12 - 1,
        })
    }

    /// The note name of this pitch
    pub fn name(&self) -> NoteName {
        self.name
    }

    /// The octave of this pitch
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// The pitch one semitone up; crossing B bumps the octave
    pub fn successor(&self) -> Pitch {
        if self.name == NoteName::B {
            Pitch::new(NoteName::C, self.octave + 1)
        } else {
            Pitch::new(self.name.next(), self.octave)
        }
    }

    /// Absolute distance to another pitch, in semitones
    pub fn distance(&self, other: &Pitch) -> i32 {
        ((other.octave - self.octave) * 12 - (self.name.semitone() - other.name.semitone())).abs()
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.octave
            .cmp(&other.octave)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name.symbol(), self.octave)
    }
}
