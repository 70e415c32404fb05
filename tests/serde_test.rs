// Hosts persist compositions as JSON; a serialized score must come back
// identical, cached extremes included.

use beatscore::{Note, NoteName, Pitch, Score, ScoreEdit, ScoreRead};

#[test]
fn test_score_json_round_trip() {
    let mut score = Score::new();
    score.set_tempo(150_000).unwrap();
    score.set_beats_per_measure(6).unwrap();
    score
        .add_note(Note::new(Pitch::new(NoteName::FSharp, 3), 4, 0, 2, 80).unwrap())
        .unwrap();
    score
        .add_note(Note::new(Pitch::new(NoteName::D, 5), 2, 3, 1, 96).unwrap())
        .unwrap();

    let json = serde_json::to_string(&score).unwrap();
    let restored: Score = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, score);
    assert_eq!(restored.notes(), score.notes());
    assert_eq!(restored.low_pitch(), Some(Pitch::new(NoteName::FSharp, 3)));
    assert_eq!(restored.high_pitch(), Some(Pitch::new(NoteName::D, 5)));
    assert_eq!(restored.tempo(), 150_000);
}

#[test]
fn test_note_json_round_trip() {
    let note = Note::new(Pitch::new(NoteName::ASharp, 2), 7, 12, 5, 40).unwrap();
    let json = serde_json::to_string(&note).unwrap();
    let restored: Note = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, note);
}
