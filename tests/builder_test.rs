// Tests for the tuple-stream import builder.

use beatscore::{Note, NoteName, Pitch, ScoreBuilder, ScoreError, ScoreRead};

#[test]
fn test_build_from_tuples() {
    // Code 60 is C4; the second tuple is E4 over beats 2..=3.
    let score = ScoreBuilder::new()
        .tempo(200_000)
        .note(0, 4, 1, 60, 72)
        .note(2, 4, 1, 64, 72)
        .build()
        .unwrap();

    assert_eq!(score.tempo(), 200_000);
    let c4 = Note::new(Pitch::new(NoteName::C, 4), 4, 0, 1, 72).unwrap();
    let e4 = Note::new(Pitch::new(NoteName::E, 4), 2, 2, 1, 72).unwrap();
    for beat in 0..4 {
        assert!(score.notes_at(beat).unwrap().contains(&c4));
    }
    assert!(score.notes_at(2).unwrap().contains(&e4));
    assert_eq!(score.low_pitch(), Some(Pitch::new(NoteName::C, 4)));
    assert_eq!(score.high_pitch(), Some(Pitch::new(NoteName::E, 4)));
}

#[test]
fn test_build_empty_uses_default_tempo() {
    let score = ScoreBuilder::new().build().unwrap();
    assert_eq!(score.tempo(), 60);
    assert!(score.notes().is_empty());
}

#[test]
fn test_build_rejects_bad_pitch_code() {
    let err = ScoreBuilder::new().note(0, 1, 1, 128, 64).build();
    assert_eq!(err, Err(ScoreError::PitchCodeOutOfRange(128)));
}

#[test]
fn test_build_rejects_negative_start() {
    let err = ScoreBuilder::new().note(-2, 1, 1, 60, 64).build();
    assert_eq!(err, Err(ScoreError::NegativeStartBeat(-2)));
}

#[test]
fn test_build_rejects_end_before_start() {
    let err = ScoreBuilder::new().note(5, 3, 1, 60, 64).build();
    assert_eq!(err, Err(ScoreError::NegativeDuration(-2)));
}

#[test]
fn test_build_rejects_non_positive_tempo() {
    let err = ScoreBuilder::new().tempo(0).note(0, 1, 1, 60, 64).build();
    assert_eq!(err, Err(ScoreError::NonPositiveTempo(0)));
}

#[test]
fn test_build_accepts_zero_length_tuple() {
    // end == start yields a zero-duration note, accepted but inert.
    let score = ScoreBuilder::new().note(3, 3, 1, 60, 64).build().unwrap();
    assert!(score.notes().is_empty());
}

#[test]
fn test_build_collapses_duplicate_tuples() {
    let score = ScoreBuilder::new()
        .note(0, 2, 1, 60, 64)
        .note(0, 2, 1, 60, 64)
        .build()
        .unwrap();
    assert_eq!(score.notes_at(0).unwrap().len(), 1);
}
