//! Fretted string instruments as a grid of pitch classes.

use serde::Deserialize;

use crate::error::TheoryError;
use crate::note::Note;
use crate::pitch::Pitch;

/// Default fret count for fretboard reports.
pub const DEFAULT_FRETS: u8 = 12;

/// Raw tuning file for YAML deserialization.
#[derive(Deserialize, Debug, Default)]
pub struct RawTuningConfig {
    pub tuning: Option<Vec<String>>,
    pub frets: Option<u8>,
}

/// An instrument neck: one open pitch class per string plus a fret count.
/// Strings are ordered high to low, the way tablature is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    strings: Vec<Pitch>,
    num_frets: u8,
}

impl Fretboard {
    /// Build a fretboard from open-string pitch ids, high string first.
    pub fn new<S: AsRef<str>>(tuning: &[S], num_frets: u8) -> Result<Fretboard, TheoryError> {
        let strings = tuning
            .iter()
            .map(|id| Pitch::by_id(id.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Fretboard { strings, num_frets })
    }

    /// Standard-tuned six-string guitar with twelve frets.
    pub fn standard() -> Fretboard {
        let strings = [7, 2, 10, 5, 0, 7].iter().map(|&i| Pitch::by_index(i)).collect();
        Fretboard {
            strings,
            num_frets: DEFAULT_FRETS,
        }
    }

    /// Load a fretboard from a YAML tuning file with optional `tuning` and
    /// `frets` keys. Missing keys fall back to the standard guitar setup.
    pub fn from_yaml(source: &str) -> Result<Fretboard, TheoryError> {
        let raw: RawTuningConfig = serde_yaml::from_str(source)
            .map_err(|e| TheoryError::InvalidTuning(e.to_string()))?;
        let num_frets = raw.frets.unwrap_or(DEFAULT_FRETS);
        match &raw.tuning {
            Some(ids) if ids.is_empty() => {
                Err(TheoryError::InvalidTuning("tuning lists no strings".to_string()))
            }
            Some(ids) => Fretboard::new(ids, num_frets),
            None => {
                let mut fretboard = Fretboard::standard();
                fretboard.num_frets = num_frets;
                Ok(fretboard)
            }
        }
    }

    /// Open pitch classes, high string first.
    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    pub fn num_strings(&self) -> usize {
        self.strings.len()
    }

    pub fn num_frets(&self) -> u8 {
        self.num_frets
    }

    fn open_pitch(&self, string: usize) -> Result<Pitch, TheoryError> {
        self.strings
            .get(string)
            .copied()
            .ok_or_else(|| TheoryError::NotFound {
                kind: "string",
                id: string.to_string(),
            })
    }

    /// The note sounding at a string and fret, fret 0 being the open string.
    pub fn note_at(&self, string: usize, fret: u8) -> Result<Note, TheoryError> {
        let open = self.open_pitch(string)?;
        Note::from_pitch_index(open.index as i8 + (fret % 12) as i8, 0)
    }

    /// The lowest fret on a string that sounds a pitch class, in [0, 12).
    pub fn fret_for(&self, string: usize, pitch: Pitch) -> Result<u8, TheoryError> {
        let open = self.open_pitch(string)?;
        Ok(((Pitch::diff(pitch.index, open.index) + 12) % 12) as u8)
    }
}
