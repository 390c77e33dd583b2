//! Named scales, given as the intervals of each degree above the tonic.

use log::debug;
use snafu::Snafu;

use crate::interval::Interval;
use crate::note::{Accidental, Note, NoteName};

/// All known scales. The last interval of every scale is the octave.
const SCALES: &[(&str, &[Interval])] = &[
    (
        "Major",
        &[
            Interval::MAJOR_SECOND,
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SIXTH,
            Interval::MAJOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Harmonic Minor",
        &[
            Interval::MAJOR_SECOND,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SIXTH,
            Interval::MAJOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Melodic Minor",
        &[
            Interval::MAJOR_SECOND,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SIXTH,
            Interval::MAJOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Dorian",
        &[
            Interval::MAJOR_SECOND,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SIXTH,
            Interval::MINOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Phrygian",
        &[
            Interval::MINOR_SECOND,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SIXTH,
            Interval::MINOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Lydian",
        &[
            Interval::MAJOR_SECOND,
            Interval::MAJOR_THIRD,
            Interval::AUGMENTED_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SIXTH,
            Interval::MAJOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Mixolydian",
        &[
            Interval::MAJOR_SECOND,
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SIXTH,
            Interval::MINOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Aeolian",
        &[
            Interval::MAJOR_SECOND,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SIXTH,
            Interval::MINOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Locrian",
        &[
            Interval::MINOR_SECOND,
            Interval::MINOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::DIMINISHED_FIFTH,
            Interval::MINOR_SIXTH,
            Interval::MINOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Major Pentatonic",
        &[
            Interval::MAJOR_SECOND,
            Interval::MAJOR_THIRD,
            Interval::PERFECT_FIFTH,
            Interval::MAJOR_SIXTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
    (
        "Minor Pentatonic",
        &[
            Interval::MINOR_THIRD,
            Interval::PERFECT_FOURTH,
            Interval::PERFECT_FIFTH,
            Interval::MINOR_SEVENTH,
            Interval::PERFECT_OCTAVE,
        ],
    ),
];

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ScaleError {
    #[snafu(display("{} is not a valid scale", name))]
    UnknownScale { name: String },
}

/// All known scales with their intervals, in table order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static [Interval])> {
    SCALES.iter().copied()
}

/// The names of all known scales, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    all().map(|(name, _)| name)
}

/// The intervals making up the scale with the given name.
///
/// # Examples
///
/// ```
/// use syntxt_theory::interval::Interval;
/// use syntxt_theory::scale;
///
/// let pentatonic = scale::intervals("Minor Pentatonic").unwrap();
/// let names: Vec<String> = pentatonic.iter().map(|i| i.to_string()).collect();
/// assert_eq!(names, ["m3", "P4", "P5", "m7", "P8"]);
/// assert_eq!(pentatonic.last(), Some(&Interval::PERFECT_OCTAVE));
/// assert_eq!(scale::intervals("Blues"), None);
/// ```
pub fn intervals(name: &str) -> Option<&'static [Interval]> {
    all()
        .find(|(known, _)| *known == name)
        .map(|(_, intervals)| intervals)
}

impl Note {
    /// All notes of a scale starting at this note, including the octave at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use syntxt_theory::note::Note;
    ///
    /// let scale = Note::parse("A").unwrap().scale("Minor Pentatonic").unwrap();
    /// let names: Vec<String> = scale.iter().map(|n| n.to_string()).collect();
    /// assert_eq!(names, ["A", "C", "D", "E", "G", "A"]);
    /// ```
    pub fn scale(self, name: &str) -> Result<Vec<Note>, ScaleError> {
        let degrees = intervals(name).ok_or_else(|| ScaleError::UnknownScale {
            name: name.to_owned(),
        })?;
        debug!("building {} {} scale from {:?}", self, name, degrees);

        let mut notes = Vec::with_capacity(degrees.len() + 1);
        notes.push(self);
        notes.extend(degrees.iter().map(|interval| self + *interval));
        Ok(notes)
    }
}

/// Walk around the circle of fifths starting at C, by repeatedly taking the fifth
/// degree of the major scale of the previous note.
///
/// The result contains 13 notes, starting and ending with C.
pub fn circle_of_fifths() -> Vec<Note> {
    let mut note = Note::new(NoteName::C, Accidental::Base);
    let mut circle = vec![note];
    for _ in 0..12 {
        // The fifth degree of any major scale is a perfect fifth above its tonic.
        note = note + Interval::PERFECT_FIFTH;
        circle.push(note);
    }
    circle
}
