//! Intervals between two tones, named the way they are in theory books ("m3", "P5", ...).

use std::{fmt, str::FromStr};

use snafu::Snafu;

/// All intervals that can be parsed, in table order.
///
/// Different intervals may span the same distance, e.g. a minor third, an augmented second and a
/// diminished third are all three semitones wide.
const ALL: [Interval; 24] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_SECOND,
    Interval::MAJOR_SECOND,
    Interval::MINOR_THIRD,
    Interval::AUGMENTED_SECOND,
    Interval::DIMINISHED_THIRD,
    Interval::MAJOR_THIRD,
    Interval::DIMINISHED_FOURTH,
    Interval::PERFECT_FOURTH,
    Interval::AUGMENTED_THIRD,
    Interval::AUGMENTED_FOURTH,
    Interval::DIMINISHED_FIFTH,
    Interval::PERFECT_FIFTH,
    Interval::DIMINISHED_SIXTH,
    Interval::MINOR_SIXTH,
    Interval::AUGMENTED_FIFTH,
    Interval::MAJOR_SIXTH,
    Interval::DIMINISHED_SEVENTH,
    Interval::MINOR_SEVENTH,
    Interval::AUGMENTED_SIXTH,
    Interval::MAJOR_SEVENTH,
    Interval::DIMINISHED_OCTAVE,
    Interval::PERFECT_OCTAVE,
    Interval::AUGMENTED_SEVENTH,
];

/// All known intervals, in table order.
pub fn all() -> impl Iterator<Item = Interval> {
    ALL.iter().copied()
}

/// The quality part of an interval name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl Quality {
    /// The single character used for this quality in interval names.
    pub fn symbol(self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }

    fn from_symbol(symbol: char) -> Option<Quality> {
        match symbol {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' => Some(Quality::Augmented),
            'd' => Some(Quality::Diminished),
            _ => None,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quality::Perfect => "perfect",
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Augmented => "augmented",
            Quality::Diminished => "diminished",
        };
        f.write_str(name)
    }
}

/// A named interval, e.g. a minor third.
///
/// The name is kept alongside the distance, so that enharmonic intervals
/// such as "A4" and "d5" remain distinguishable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Interval {
    quality: Quality,
    /// Scale degree number, 1 to 8.
    degree: u8,
    /// Distance in semitones, 0 to 12.
    semitones: u8,
}

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseIntervalError {
    #[snafu(display("Could not parse the interval."))]
    UnknownInterval { name: String },
}

impl Interval {
    pub const PERFECT_UNISON: Interval = Interval::new(Quality::Perfect, 1, 0);
    pub const MINOR_SECOND: Interval = Interval::new(Quality::Minor, 2, 1);
    pub const MAJOR_SECOND: Interval = Interval::new(Quality::Major, 2, 2);
    pub const MINOR_THIRD: Interval = Interval::new(Quality::Minor, 3, 3);
    pub const AUGMENTED_SECOND: Interval = Interval::new(Quality::Augmented, 2, 3);
    pub const DIMINISHED_THIRD: Interval = Interval::new(Quality::Diminished, 3, 3);
    pub const MAJOR_THIRD: Interval = Interval::new(Quality::Major, 3, 4);
    pub const DIMINISHED_FOURTH: Interval = Interval::new(Quality::Diminished, 4, 4);
    pub const PERFECT_FOURTH: Interval = Interval::new(Quality::Perfect, 4, 5);
    pub const AUGMENTED_THIRD: Interval = Interval::new(Quality::Augmented, 3, 5);
    pub const AUGMENTED_FOURTH: Interval = Interval::new(Quality::Augmented, 4, 6);
    pub const DIMINISHED_FIFTH: Interval = Interval::new(Quality::Diminished, 5, 6);
    pub const PERFECT_FIFTH: Interval = Interval::new(Quality::Perfect, 5, 7);
    pub const DIMINISHED_SIXTH: Interval = Interval::new(Quality::Diminished, 6, 7);
    pub const MINOR_SIXTH: Interval = Interval::new(Quality::Minor, 6, 8);
    pub const AUGMENTED_FIFTH: Interval = Interval::new(Quality::Augmented, 5, 8);
    pub const MAJOR_SIXTH: Interval = Interval::new(Quality::Major, 6, 9);
    pub const DIMINISHED_SEVENTH: Interval = Interval::new(Quality::Diminished, 7, 9);
    pub const MINOR_SEVENTH: Interval = Interval::new(Quality::Minor, 7, 10);
    pub const AUGMENTED_SIXTH: Interval = Interval::new(Quality::Augmented, 6, 10);
    pub const MAJOR_SEVENTH: Interval = Interval::new(Quality::Major, 7, 11);
    pub const DIMINISHED_OCTAVE: Interval = Interval::new(Quality::Diminished, 8, 11);
    pub const PERFECT_OCTAVE: Interval = Interval::new(Quality::Perfect, 8, 12);
    pub const AUGMENTED_SEVENTH: Interval = Interval::new(Quality::Augmented, 7, 12);

    const fn new(quality: Quality, degree: u8, semitones: u8) -> Interval {
        Interval {
            quality,
            degree,
            semitones,
        }
    }

    /// Parse an interval from its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use syntxt_theory::interval::*;
    ///
    /// let third = Interval::parse("m3").unwrap();
    /// assert_eq!(third, Interval::MINOR_THIRD);
    /// assert_eq!(third.semitones(), 3);
    /// assert_eq!(third.quality(), Quality::Minor);
    /// assert_eq!(third.degree(), 3);
    /// assert!(Interval::parse("X9").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Interval, ParseIntervalError> {
        let unknown = || ParseIntervalError::UnknownInterval {
            name: name.to_owned(),
        };

        // A quality symbol followed by a single digit.
        let mut chars = name.chars();
        let quality = chars
            .next()
            .and_then(Quality::from_symbol)
            .ok_or_else(unknown)?;
        let degree = chars
            .next()
            .and_then(|ch| ch.to_digit(10))
            .ok_or_else(unknown)? as u8;
        if chars.next().is_some() {
            return Err(unknown());
        }

        all()
            .find(|known| known.quality == quality && known.degree == degree)
            .ok_or_else(unknown)
    }

    pub fn semitones(self) -> u8 {
        self.semitones
    }

    pub fn quality(self) -> Quality {
        self.quality
    }

    pub fn degree(self) -> u8 {
        self.degree
    }
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality.symbol(), self.degree)
    }
}
