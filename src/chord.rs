//! Chord construction and naming.
//!
//! A chord is an ordered list of spelled notes whose first element is the
//! root. Naming works in two stages: the intervals above the root are
//! reduced to degree tokens ("1", "♭3", "5", ...), then the token sequence
//! is matched against a fixed grammar position by position (triad, 7th,
//! 9th, 11th, 13th). Note sets the grammar cannot name are rejected rather
//! than approximated.

use crate::error::TheoryError;
use crate::note::Note;
use crate::scale::{Scale, MAJOR_SEMITONES};

/// A named chord. The notes keep the order they were stacked in, root
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub name: String,
    pub notes: Vec<Note>,
}

impl Chord {
    /// Name a stack of notes. The first note is taken as the root; between
    /// three and seven notes can be named.
    pub fn from_notes(notes: Vec<Note>) -> Result<Chord, TheoryError> {
        let formula = Chord::formula_of(&notes);
        let name = name_from_formula(&notes, &formula)?;
        Ok(Chord { name, notes })
    }

    /// The root note, the first element of the stack. Chords built by
    /// [`Chord::from_notes`] always have one.
    pub fn root(&self) -> Option<Note> {
        self.notes.first().copied()
    }

    /// Semitone distance of each note above the root, in [0, 12).
    pub fn chord_indices(notes: &[Note]) -> Vec<u8> {
        match notes.first() {
            Some(root) => {
                let root_index = root.pitch_index();
                notes
                    .iter()
                    .map(|n| (n.pitch_index() + 12 - root_index) % 12)
                    .collect()
            }
            None => Vec::new(),
        }
    }

    /// Degree tokens of each note relative to the root.
    pub fn formula_of(notes: &[Note]) -> Vec<String> {
        Chord::chord_indices(notes)
            .into_iter()
            .map(degree_token)
            .collect()
    }

    /// Degree tokens of this chord's notes.
    pub fn formula(&self) -> Vec<String> {
        Chord::formula_of(&self.notes)
    }
}

/// Token for a semitone distance above the root: the nearest major-scale
/// degree, flatted or sharped by the leftover semitones. Ties go to the
/// higher degree, so 3 semitones is ♭3 rather than ♯2 and 6 is ♭5.
fn degree_token(index: u8) -> String {
    let mut min_degree = 0usize;
    let mut min_diff = index as i8;
    for (i, &major) in MAJOR_SEMITONES.iter().enumerate().skip(1) {
        let diff = index as i8 - major as i8;
        if diff.abs() <= min_diff.abs() {
            min_degree = i;
            min_diff = diff;
        }
    }
    if min_diff == 0 {
        format!("{}", min_degree + 1)
    } else if min_diff < 0 {
        format!("♭{}", min_degree + 1)
    } else {
        format!("♯{}", min_degree + 1)
    }
}

fn invalid(what: &str, formula: &[String]) -> TheoryError {
    TheoryError::InvalidChord(format!("{what} [{}]", formula.join(" ")))
}

/// Match the degree tokens against the chord grammar and assemble the name.
///
/// The name has four parts: root, triad quality, the highest stacked
/// extension ("7", "9", ...), and accumulated modifiers. Each position past
/// the triad either raises the extension or appends a modifier; an
/// unexpected token at any position rejects the whole chord.
fn name_from_formula(notes: &[Note], formula: &[String]) -> Result<String, TheoryError> {
    if formula.first().map(String::as_str) != Some("1") {
        return Err(invalid("bad root", formula));
    }
    if formula.len() < 3 {
        return Err(invalid("too few notes", formula));
    }
    if formula.len() > 7 {
        return Err(invalid("too many notes", formula));
    }

    let mut triad = String::new();
    let mut last = "";
    let mut modifiers = String::new();

    match (formula[1].as_str(), formula[2].as_str()) {
        ("3", "5") => {}
        ("♭3", "5") => triad.push('m'),
        ("♭3", "♭5") => triad.push_str("dim"),
        ("3", "♭6") => triad.push_str("aug"),
        _ => return Err(invalid("bad triad", formula)),
    }

    if formula.len() >= 4 {
        match formula[3].as_str() {
            "7" => {
                triad.push_str(" maj");
                last = "7";
            }
            "♭7" => last = "7",
            "6" => {
                triad.push_str(" dim");
                last = "7";
            }
            _ => return Err(invalid("bad 7th", formula)),
        }
    }

    if formula.len() >= 5 {
        match formula[4].as_str() {
            "2" => last = "9",
            "♭2" => modifiers.push_str("♭9"),
            "♭3" => modifiers.push_str("♯9"),
            _ => return Err(invalid("bad 9th", formula)),
        }
    }

    if formula.len() >= 6 {
        match formula[5].as_str() {
            "4" => last = "11",
            "3" => modifiers.push_str("add3"),
            "♭4" => modifiers.push_str("♭11"),
            "♭5" => modifiers.push_str("♯11"),
            _ => return Err(invalid("bad 11th", formula)),
        }
    }

    if formula.len() >= 7 {
        match formula[6].as_str() {
            "6" => last = "13",
            "♭6" => modifiers.push_str("♭13"),
            "♭7" => modifiers.push_str("♯13"),
            _ => return Err(invalid("bad 13th", formula)),
        }
    }

    // notes and formula are the same length, so the root exists here.
    let root = notes[0].name();
    Ok(format!("{root}{triad}{last}{modifiers}"))
}

/// Stack chords on every degree of a scale: thirds within the scale, in
/// sizes three through seven notes. Scales whose stacks fall outside the
/// chord grammar (most non-heptatonic scales) fail on the first bad stack.
pub fn chords_for_scale(scale: &Scale) -> Result<Vec<Chord>, TheoryError> {
    let notes = scale.notes()?;
    let len = notes.len();
    let mut chords = Vec::new();
    for i in 0..len {
        let stack: Vec<Note> = (0..7).map(|k| notes[(i + 2 * k) % len]).collect();
        for size in 3..=7 {
            chords.push(Chord::from_notes(stack[..size].to_vec())?);
        }
    }
    Ok(chords)
}
