//! The twelve-pitch-class circle.
//!
//! All pitch arithmetic in the engine is modulo twelve over the canonical
//! `index` of these entries; ids and display names exist only at the edges
//! (lookups and rendering).

use crate::error::TheoryError;

/// Number of pitch classes in the circle.
pub const PITCH_COUNT: usize = 12;

/// One of the twelve chromatic pitch classes, octave-free.
///
/// `index` is the canonical integer representation (0 = A). Non-natural
/// entries carry both enharmonic spellings in `name` (e.g. "A♯/B♭").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch {
    pub index: u8,
    pub id: &'static str,
    pub name: &'static str,
    pub natural: bool,
}

/// The pitch-class table in canonical index order, starting at A.
/// Exactly seven entries are natural and correspond 1:1 to the letters A-G.
const PITCH_TABLE: [Pitch; PITCH_COUNT] = [
    Pitch { index: 0, id: "a", name: "A", natural: true },
    Pitch { index: 1, id: "a#", name: "A♯/B♭", natural: false },
    Pitch { index: 2, id: "b", name: "B", natural: true },
    Pitch { index: 3, id: "c", name: "C", natural: true },
    Pitch { index: 4, id: "c#", name: "C♯/D♭", natural: false },
    Pitch { index: 5, id: "d", name: "D", natural: true },
    Pitch { index: 6, id: "d#", name: "D♯/E♭", natural: false },
    Pitch { index: 7, id: "e", name: "E", natural: true },
    Pitch { index: 8, id: "f", name: "F", natural: true },
    Pitch { index: 9, id: "f#", name: "F♯/G♭", natural: false },
    Pitch { index: 10, id: "g", name: "G", natural: true },
    Pitch { index: 11, id: "g#", name: "G♯/A♭", natural: false },
];

impl Pitch {
    /// All twelve pitch classes in index order.
    pub fn all() -> &'static [Pitch; PITCH_COUNT] {
        &PITCH_TABLE
    }

    /// Look up a pitch class by its short id (`"a"`, `"a#"`, ... `"g#"`).
    pub fn by_id(id: &str) -> Result<Pitch, TheoryError> {
        PITCH_TABLE
            .iter()
            .find(|p| p.id == id)
            .copied()
            .ok_or_else(|| TheoryError::NotFound {
                kind: "pitch",
                id: id.to_string(),
            })
    }

    /// Look up a pitch class by index. Any signed index works; it is folded
    /// into the circle, so `by_index(-1)` is G♯/A♭ and `by_index(12)` is A.
    pub fn by_index(index: i8) -> Pitch {
        PITCH_TABLE[index.rem_euclid(12) as usize]
    }

    /// Signed wrap-around distance `a - b` between two pitch indices.
    ///
    /// The raw difference is folded so the smaller magnitude wins: above 6 it
    /// wraps down by twelve, below -6 it wraps up. The result is in [-6, 6]
    /// and `diff(a, b) == -diff(b, a)`.
    pub fn diff(a: u8, b: u8) -> i8 {
        let d = a as i8 - b as i8;
        if d > 6 {
            d - 12
        } else if d < -6 {
            d + 12
        } else {
            d
        }
    }
}
