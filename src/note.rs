// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a note is.

use std::{fmt, ops, str::FromStr};

use log::trace;
use snafu::Snafu;

use crate::interval::Interval;

/// The name of a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteName {
    /// The pitch class of the natural note with this name.
    pub fn pitch_class(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    /// The note name whose natural note has the given pitch class, if there is one.
    pub fn from_pitch_class(pitch_class: u8) -> Option<NoteName> {
        match pitch_class {
            0 => Some(NoteName::C),
            2 => Some(NoteName::D),
            4 => Some(NoteName::E),
            5 => Some(NoteName::F),
            7 => Some(NoteName::G),
            9 => Some(NoteName::A),
            11 => Some(NoteName::B),
            _ => None,
        }
    }

    fn from_char(ch: char) -> Option<NoteName> {
        match ch {
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            _ => None,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Any offset applied to a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Accidental {
    /// The note is a half-tone lower then indicated by its name.
    Flat,
    /// The note is left unchanged.
    Base,
    /// The note is a half-tone higher then indicated by its name.
    Sharp,
}

impl Accidental {
    fn offset(self) -> i32 {
        match self {
            Accidental::Flat => -1,
            Accidental::Base => 0,
            Accidental::Sharp => 1,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accidental::Flat => f.write_str("b"),
            Accidental::Base => Ok(()),
            Accidental::Sharp => f.write_str("#"),
        }
    }
}

/// Which way a note is moved, deciding how the resulting note is spelled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Moving up prefers sharps.
    Ascending,
    /// Moving down prefers flats.
    Descending,
}

/// Spelling of every pitch class when moving up: naturals, or the natural below raised by a sharp.
const SHARP_SPELLINGS: [(NoteName, Accidental); 12] = [
    (NoteName::C, Accidental::Base),
    (NoteName::C, Accidental::Sharp),
    (NoteName::D, Accidental::Base),
    (NoteName::D, Accidental::Sharp),
    (NoteName::E, Accidental::Base),
    (NoteName::F, Accidental::Base),
    (NoteName::F, Accidental::Sharp),
    (NoteName::G, Accidental::Base),
    (NoteName::G, Accidental::Sharp),
    (NoteName::A, Accidental::Base),
    (NoteName::A, Accidental::Sharp),
    (NoteName::B, Accidental::Base),
];

/// Spelling of every pitch class when moving down: naturals, or the natural above lowered by a flat.
const FLAT_SPELLINGS: [(NoteName, Accidental); 12] = [
    (NoteName::C, Accidental::Base),
    (NoteName::D, Accidental::Flat),
    (NoteName::D, Accidental::Base),
    (NoteName::E, Accidental::Flat),
    (NoteName::E, Accidental::Base),
    (NoteName::F, Accidental::Base),
    (NoteName::G, Accidental::Flat),
    (NoteName::G, Accidental::Base),
    (NoteName::A, Accidental::Flat),
    (NoteName::A, Accidental::Base),
    (NoteName::B, Accidental::Flat),
    (NoteName::B, Accidental::Base),
];

/// A spelled pitch class without any octave, e.g. F♯.
///
/// Enharmonic notes like F♯ and G♭ share a pitch class, but are different notes
/// because they are spelled differently.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Note {
    name: NoteName,
    accidental: Accidental,
    /// Index of the semitone within the octave, starting at C with 0.
    pitch_class: u8,
}

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseNoteError {
    #[snafu(display("{} is not a valid note", spelling))]
    InvalidNote { spelling: String },
}

impl Note {
    // ==================== Constructors ====================

    /// Build a note from its name and accidental.
    ///
    /// # Examples
    ///
    /// ```
    /// use syntxt_theory::note::*;
    ///
    /// assert_eq!(Note::new(NoteName::F, Accidental::Sharp).pitch_class(), 6);
    /// assert_eq!(Note::new(NoteName::C, Accidental::Flat).pitch_class(), 11);
    /// ```
    pub fn new(name: NoteName, accidental: Accidental) -> Note {
        let pitch_class = (name.pitch_class() as i32 + accidental.offset()).rem_euclid(12);
        Note {
            name,
            accidental,
            pitch_class: pitch_class as u8,
        }
    }

    /// Parse a note of the format `<letter>[b|#]`, where the letter is an uppercase A to G.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntxt_theory::note::*;
    ///
    /// assert_eq!(Note::parse("Eb"), Ok(Note::new(NoteName::E, Accidental::Flat)));
    /// assert_eq!(Note::parse("G"), Ok(Note::new(NoteName::G, Accidental::Base)));
    /// assert!(Note::parse("H").is_err());
    /// assert!(Note::parse("C##").is_err());
    /// ```
    pub fn parse(spelling: &str) -> Result<Note, ParseNoteError> {
        let invalid = || ParseNoteError::InvalidNote {
            spelling: spelling.to_owned(),
        };

        let mut chars = spelling.chars();
        let name = chars
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(invalid)?;
        let accidental = match chars.as_str() {
            "" => Accidental::Base,
            "#" => Accidental::Sharp,
            "b" => Accidental::Flat,
            _ => return Err(invalid()),
        };
        Ok(Note::new(name, accidental))
    }

    /// Spell a bare pitch class as a note.
    ///
    /// Natural notes are used whenever possible. Otherwise, the note is spelled as a sharp
    /// when moving up, and as a flat when moving down.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntxt_theory::note::*;
    ///
    /// assert_eq!(Note::closest_tone(9, Direction::Descending).to_string(), "A");
    /// assert_eq!(Note::closest_tone(6, Direction::Ascending).to_string(), "F#");
    /// assert_eq!(Note::closest_tone(6, Direction::Descending).to_string(), "Gb");
    /// ```
    pub fn closest_tone(pitch_class: u8, direction: Direction) -> Note {
        let pitch_class = pitch_class % 12;
        let (name, accidental) = match direction {
            Direction::Ascending => SHARP_SPELLINGS[pitch_class as usize],
            Direction::Descending => FLAT_SPELLINGS[pitch_class as usize],
        };
        let note = Note::new(name, accidental);
        trace!("spelled {} {:?} as {}", pitch_class, direction, note);
        note
    }

    // ==================== Arithmetic ====================

    /// Move the note up by the given interval.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntxt_theory::note::*;
    /// # use syntxt_theory::interval::*;
    ///
    /// let eb = Note::parse("Eb").unwrap();
    /// let fifth = Interval::parse("P5").unwrap();
    /// assert_eq!(eb.add_interval(fifth).to_string(), "A#");
    /// assert_eq!((eb + fifth).to_string(), "A#");
    /// ```
    pub fn add_interval(self, interval: Interval) -> Note {
        let pitch_class = (self.pitch_class + interval.semitones()) % 12;
        Note::closest_tone(pitch_class, Direction::Ascending)
    }

    /// Move the note down by the given interval.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntxt_theory::note::*;
    /// # use syntxt_theory::interval::*;
    ///
    /// let c = Note::parse("C").unwrap();
    /// assert_eq!(c.subtract_interval(Interval::parse("m3").unwrap()).to_string(), "A");
    /// assert_eq!((c - Interval::parse("M3").unwrap()).to_string(), "Ab");
    /// ```
    pub fn subtract_interval(self, interval: Interval) -> Note {
        let pitch_class =
            (self.pitch_class as i32 - interval.semitones() as i32).rem_euclid(12) as u8;
        Note::closest_tone(pitch_class, Direction::Descending)
    }

    // ==================== Destructors ====================

    pub fn name(self) -> NoteName {
        self.name
    }

    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    pub fn pitch_class(self) -> u8 {
        self.pitch_class
    }

    /// Whether both notes denote the same pitch class, regardless of spelling.
    pub fn is_enharmonic(self, other: Note) -> bool {
        self.pitch_class == other.pitch_class
    }
}

impl ops::Add<Interval> for Note {
    type Output = Note;

    fn add(self, rhs: Interval) -> Self::Output {
        self.add_interval(rhs)
    }
}

impl ops::Sub<Interval> for Note {
    type Output = Note;

    fn sub(self, rhs: Interval) -> Self::Output {
        self.subtract_interval(rhs)
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.accidental)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval;

    const NAMES: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    fn note(spelling: &str) -> Note {
        Note::parse(spelling).unwrap()
    }

    fn interval(name: &str) -> Interval {
        Interval::parse(name).unwrap()
    }

    #[test]
    fn pitch_classes() {
        let bases = [0, 2, 4, 5, 7, 9, 11];
        for (name, base) in NAMES.iter().zip(bases.iter()) {
            let natural = note(&name.to_string());
            let sharp = note(&format!("{}#", name));
            let flat = note(&format!("{}b", name));
            assert_eq!(natural.pitch_class(), *base);
            assert_eq!(sharp.pitch_class(), (base + 1) % 12);
            assert_eq!(flat.pitch_class(), (base + 11) % 12);
        }
    }

    #[test]
    fn spelling_is_kept() {
        let f_sharp = note("F#");
        let g_flat = note("Gb");
        assert_eq!(f_sharp.to_string(), "F#");
        assert_eq!(g_flat.to_string(), "Gb");
        assert!(f_sharp.is_enharmonic(g_flat));
        assert_ne!(f_sharp, g_flat);
        assert_eq!(g_flat.name(), NoteName::G);
        assert_eq!(g_flat.accidental(), Accidental::Flat);
    }

    #[test]
    fn invalid_notes() {
        for spelling in &["H", "C##", "", "c", "Cb#", "C ", "Bbb", "#", "C♯"] {
            assert_eq!(
                Note::parse(spelling),
                Err(ParseNoteError::InvalidNote {
                    spelling: spelling.to_string()
                })
            );
        }
        assert_eq!(
            Note::parse("H").unwrap_err().to_string(),
            "H is not a valid note"
        );
    }

    #[test]
    fn closest_tone_prefers_naturals() {
        for name in NAMES.iter() {
            let natural = Note::new(*name, Accidental::Base);
            for direction in &[Direction::Ascending, Direction::Descending] {
                assert_eq!(Note::closest_tone(name.pitch_class(), *direction), natural);
            }
        }
        // B is natural, so moving down onto it never yields a C flat.
        assert_eq!(Note::closest_tone(11, Direction::Descending).to_string(), "B");
        assert_eq!(Note::closest_tone(0, Direction::Ascending).to_string(), "C");
    }

    #[test]
    fn closest_tone_keeps_pitch_class() {
        for pitch_class in 0..12 {
            for direction in &[Direction::Ascending, Direction::Descending] {
                let note = Note::closest_tone(pitch_class, *direction);
                assert_eq!(note.pitch_class(), pitch_class, "{:?}", direction);
                if let Some(name) = NoteName::from_pitch_class(pitch_class) {
                    assert_eq!(note, Note::new(name, Accidental::Base));
                }
                let expected = match (note.accidental(), direction) {
                    (Accidental::Base, _) => true,
                    (Accidental::Sharp, Direction::Ascending) => true,
                    (Accidental::Flat, Direction::Descending) => true,
                    _ => false,
                };
                assert!(expected, "{} {:?} spelled as {}", pitch_class, direction, note);
            }
        }
        assert_eq!(Note::closest_tone(13, Direction::Descending).to_string(), "Db");
    }

    #[test]
    fn closest_tone_accidentals() {
        let ascending: Vec<String> = [1, 3, 6, 8, 10]
            .iter()
            .map(|pc| Note::closest_tone(*pc, Direction::Ascending).to_string())
            .collect();
        assert_eq!(ascending, ["C#", "D#", "F#", "G#", "A#"]);

        let descending: Vec<String> = [1, 3, 6, 8, 10]
            .iter()
            .map(|pc| Note::closest_tone(*pc, Direction::Descending).to_string())
            .collect();
        assert_eq!(descending, ["Db", "Eb", "Gb", "Ab", "Bb"]);
    }

    #[test]
    fn transpositions() {
        assert_eq!((note("A") + interval("m3")).to_string(), "C");
        assert_eq!((note("C") - interval("m3")).to_string(), "A");
        assert_eq!((note("F#") + interval("d8")).to_string(), "F");
        assert_eq!((note("B") + interval("m2")).to_string(), "C");
        assert_eq!((note("Eb") + interval("P5")).to_string(), "A#");
        assert_eq!((note("C") - interval("m2")).to_string(), "B");
        assert_eq!((note("Gb") - interval("d7")).to_string(), "A");
    }

    #[test]
    fn unison_is_identity_for_naturals() {
        for name in NAMES.iter() {
            let natural = Note::new(*name, Accidental::Base);
            assert_eq!(natural + interval("P1"), natural);
            assert_eq!(natural - interval("P1"), natural);
        }
        // Accidentals get respelled according to the direction.
        assert_eq!((note("Gb") + interval("P1")).to_string(), "F#");
        assert_eq!((note("F#") - interval("P1")).to_string(), "Gb");
    }

    #[test]
    fn up_and_down_keeps_pitch_class() {
        for name in NAMES.iter() {
            for accidental in &[Accidental::Flat, Accidental::Base, Accidental::Sharp] {
                let start = Note::new(*name, *accidental);
                for i in interval::all() {
                    assert!(
                        ((start + i) - i).is_enharmonic(start),
                        "{} + {} - {}",
                        start,
                        i,
                        i
                    );
                    assert!(((start - i) + i).is_enharmonic(start));
                }
            }
        }
    }

    #[test]
    fn octave_wraps_around() {
        assert_eq!((note("Cb") + interval("P8")).to_string(), "B");
        assert_eq!((note("B#") - interval("P8")).to_string(), "C");
        assert_eq!((note("E") + interval("A7")).to_string(), "E");
    }
}
