//! Spelled notes: a natural letter plus an accidental.
//!
//! A [`Pitch`](crate::pitch::Pitch) is an anonymous point on the circle; a
//! `Note` commits to one spelling of it. The same pitch class can be written
//! several ways (D♯ and E♭ share index 6), and scale spelling depends on
//! picking the right one. Notes built on a non-natural pitch are re-anchored
//! on the natural letter one semitone below, so "A♯/B♭ raised by one" becomes
//! A𝄪 rather than an accidental stacked on an ambiguous name.

use crate::error::TheoryError;
use crate::pitch::Pitch;

/// Accidental applied to a natural letter, from double flat to double sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Map a semitone shift to an accidental. Shifts outside [-2, 2] have no
    /// conventional symbol and are rejected.
    pub fn from_shift(shift: i8) -> Result<Accidental, TheoryError> {
        match shift {
            -2 => Ok(Accidental::DoubleFlat),
            -1 => Ok(Accidental::Flat),
            0 => Ok(Accidental::Natural),
            1 => Ok(Accidental::Sharp),
            2 => Ok(Accidental::DoubleSharp),
            _ => Err(TheoryError::ShiftRange(shift)),
        }
    }

    /// The semitone shift this accidental applies to its letter.
    pub fn shift(&self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Rendering glyph. A natural renders as the bare letter, so its glyph is
    /// the empty string rather than the explicit natural sign.
    pub fn glyph(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "𝄫",
            Accidental::Flat => "♭",
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "𝄪",
        }
    }
}

/// A spelled note. `natural` is always one of the seven natural pitch
/// classes; the accidental carries the offset from that letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub natural: Pitch,
    pub accidental: Accidental,
}

impl Note {
    /// Build a note from a pitch class and a semitone shift.
    ///
    /// A natural pitch anchors directly. A non-natural pitch is re-anchored
    /// on the natural a semitone below it with the shift raised by one, which
    /// keeps the stored letter unambiguous. Shifts that land outside the
    /// double-flat..double-sharp range after re-anchoring are rejected.
    pub fn from_pitch(pitch: Pitch, shift: i8) -> Result<Note, TheoryError> {
        let (natural, shift) = if pitch.natural {
            (pitch, shift)
        } else {
            // Every non-natural entry sits one semitone above a natural one.
            (Pitch::by_index(pitch.index as i8 - 1), shift + 1)
        };
        Ok(Note {
            natural,
            accidental: Accidental::from_shift(shift)?,
        })
    }

    /// Build a note from a pitch id such as `"c"` or `"f#"`.
    pub fn from_pitch_id(id: &str, shift: i8) -> Result<Note, TheoryError> {
        Note::from_pitch(Pitch::by_id(id)?, shift)
    }

    /// Build a note from a signed pitch index, folded into the circle.
    pub fn from_pitch_index(index: i8, shift: i8) -> Result<Note, TheoryError> {
        Note::from_pitch(Pitch::by_index(index), shift)
    }

    /// The pitch class this note sounds as, after applying the accidental.
    pub fn pitch_index(&self) -> u8 {
        (self.natural.index as i8 + self.accidental.shift()).rem_euclid(12) as u8
    }

    /// The sounding pitch class as a table entry.
    pub fn pitch(&self) -> Pitch {
        Pitch::by_index(self.pitch_index() as i8)
    }

    /// Display name: natural letter followed by the accidental glyph.
    pub fn name(&self) -> String {
        format!("{}{}", self.natural.name, self.accidental.glyph())
    }
}
