//! Scales as step patterns anchored on a tonic.
//!
//! A [`Scale`] is a tonic plus a list of ascending semitone steps that must
//! close the octave (sum to 12), carrying its catalog labels along. Every
//! other view is derived from the tonic and steps:
//!
//! - `semitones` / `pitch_indices`: the absolute positions of the degrees,
//! - `kind`: the size classification (pentatonic, heptatonic, ...),
//! - `intervals` / `formula`: conventional names for the degrees,
//! - `number`: the 12-bit occupancy mask as a binary string,
//! - `notes`: properly spelled note names, chosen by accidental cost.
//!
//! Spelling is the only non-trivial derivation. Each candidate anchor letter
//! produces one full spelling by walking the letter cycle degree by degree;
//! the candidate with the lowest sum of squared accidental shifts wins, and
//! on a tie the earlier candidate (the flat-side neighbor) is kept.

use crate::error::TheoryError;
use crate::note::{Accidental, Note};
use crate::pitch::Pitch;

/// Degree semitones of the major scale, the reference point for formulas
/// and for chord degree naming.
pub(crate) const MAJOR_SEMITONES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Interval name for each semitone distance from the tonic.
const INTERVAL_NAMES: [&str; 12] = [
    "P1", "m2", "M2", "m3", "M3", "P4", "d5", "P5", "m6", "M6", "m7", "M7",
];

/// (degree, shift) for each semitone, used for scales that are not
/// heptatonic and so have no positional degree mapping. Ambiguous semitones
/// resolve to the flat spelling of the higher degree (3 is ♭3, 6 is ♭5).
const DEGREE_TABLE: [(u8, i8); 12] = [
    (1, 0),
    (2, -1),
    (2, 0),
    (3, -1),
    (3, 0),
    (4, 0),
    (5, -1),
    (5, 0),
    (6, -1),
    (6, 0),
    (7, -1),
    (7, 0),
];

/// Size classification of a scale by its number of degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Pentatonic,
    Hexatonic,
    Heptatonic,
    Octatonic,
    Chromatic,
}

impl ScaleKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScaleKind::Pentatonic => "Pentatonic",
            ScaleKind::Hexatonic => "Hexatonic",
            ScaleKind::Heptatonic => "Heptatonic",
            ScaleKind::Octatonic => "Octatonic",
            ScaleKind::Chromatic => "Chromatic",
        }
    }
}

/// One element of a numeric scale formula: a degree number and the semitone
/// shift away from its major-scale position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaStep {
    pub degree: u8,
    pub shift: i8,
}

/// Cyclic left-rotation of a step pattern, deriving mode `n` of a family.
pub fn rotate_steps(steps: &[u8], n: usize) -> Vec<u8> {
    let mut rotated = steps.to_vec();
    if !rotated.is_empty() {
        let n = n % rotated.len();
        rotated.rotate_left(n);
    }
    rotated
}

/// A scale: its catalog labels, a tonic, and the ascending step pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pub id: String,
    pub name: String,
    pub family: String,
    pub tonic: Note,
    pub steps: Vec<u8>,
}

impl Scale {
    /// Build a scale. Rejects step patterns that do not close the octave,
    /// then resolves the tonic id.
    pub fn new(
        id: &str,
        name: &str,
        family: &str,
        steps: Vec<u8>,
        tonic_id: &str,
    ) -> Result<Scale, TheoryError> {
        let sum: u32 = steps.iter().map(|&s| s as u32).sum();
        if sum != 12 {
            return Err(TheoryError::InvalidScale(format!(
                "steps sum to {sum}, expected 12"
            )));
        }
        Ok(Scale {
            id: id.to_string(),
            name: name.to_string(),
            family: family.to_string(),
            tonic: Note::from_pitch_id(tonic_id, 0)?,
            steps,
        })
    }

    /// The tonic's sounding pitch class.
    pub fn tonic_pitch(&self) -> Pitch {
        Pitch::by_index(self.tonic.pitch_index() as i8)
    }

    /// Semitone offset of each degree from the tonic. The first entry is
    /// always 0; the closing octave is not included, so the length equals
    /// the number of degrees.
    pub fn semitones(&self) -> Vec<u8> {
        let mut acc = 0u8;
        self.steps
            .iter()
            .map(|&step| {
                let here = acc;
                acc += step;
                here
            })
            .collect()
    }

    /// Pitch index of each degree, folded into the circle.
    pub fn pitch_indices(&self) -> Vec<u8> {
        let tonic = self.tonic.pitch_index();
        self.semitones().iter().map(|&s| (s + tonic) % 12).collect()
    }

    /// Size classification, if the degree count has a conventional name.
    pub fn kind(&self) -> Option<ScaleKind> {
        match self.steps.len() {
            5 => Some(ScaleKind::Pentatonic),
            6 => Some(ScaleKind::Hexatonic),
            7 => Some(ScaleKind::Heptatonic),
            8 => Some(ScaleKind::Octatonic),
            12 => Some(ScaleKind::Chromatic),
            _ => None,
        }
    }

    /// Interval name of each degree relative to the tonic.
    pub fn intervals(&self) -> Vec<&'static str> {
        self.semitones()
            .iter()
            // Intervals repeat at the octave.
            .map(|&s| INTERVAL_NAMES[s as usize % 12])
            .collect()
    }

    /// The scale as a 12-bit occupancy mask rendered as a binary string,
    /// most significant bit for the major seventh. The major scale is
    /// "101010110101".
    pub fn number(&self) -> String {
        let mut mask: u16 = 0;
        for s in self.semitones() {
            mask |= 1 << s;
        }
        format!("{mask:012b}")
    }

    /// Numeric formula: degree and shift for every element of the scale.
    ///
    /// Heptatonic scales map positionally against the major scale, so the
    /// i-th element is degree i+1 with whatever shift its semitone implies.
    /// Other sizes assign each semitone a fixed degree from a lookup table.
    pub fn formula_numeric(&self) -> Vec<FormulaStep> {
        let semitones = self.semitones();
        if self.steps.len() == 7 {
            semitones
                .iter()
                .enumerate()
                .map(|(i, &s)| FormulaStep {
                    degree: i as u8 + 1,
                    shift: s as i8 - MAJOR_SEMITONES[i] as i8,
                })
                .collect()
        } else {
            semitones
                .iter()
                .map(|&s| {
                    let (degree, shift) = DEGREE_TABLE[s as usize % 12];
                    FormulaStep { degree, shift }
                })
                .collect()
        }
    }

    /// Rendered formula, e.g. `["1", "2", "♭3", "4", "5", "♭6", "7"]` for
    /// the harmonic minor scale. Fails if a positional shift has no
    /// accidental symbol, which only happens for unusual heptatonic
    /// patterns.
    pub fn formula(&self) -> Result<Vec<String>, TheoryError> {
        self.formula_numeric()
            .into_iter()
            .map(|step| {
                let accidental = Accidental::from_shift(step.shift)?;
                Ok(format!("{}{}", accidental.glyph(), step.degree))
            })
            .collect()
    }

    /// Spell the scale as note names.
    ///
    /// A natural tonic anchors its own spelling. A non-natural tonic is
    /// tried on both neighboring letters (flat side first), and the spelling
    /// with the lower sum of squared accidental shifts wins; ties keep the
    /// flat-side candidate. Fails if any degree would need more than a
    /// double accidental.
    pub fn notes(&self) -> Result<Vec<Note>, TheoryError> {
        let tonic = self.tonic_pitch();
        let anchors: Vec<Pitch> = if tonic.natural {
            vec![tonic]
        } else {
            vec![
                Pitch::by_index(tonic.index as i8 - 1),
                Pitch::by_index(tonic.index as i8 + 1),
            ]
        };

        let mut best: Option<(i32, Vec<Note>)> = None;
        for anchor in anchors {
            let spelled = self.spell_on(anchor)?;
            let cost: i32 = spelled
                .iter()
                .map(|n| {
                    let shift = n.accidental.shift() as i32;
                    shift * shift
                })
                .sum();
            let better = match &best {
                Some((best_cost, _)) => cost < *best_cost,
                None => true,
            };
            if better {
                best = Some((cost, spelled));
            }
        }
        Ok(best.map(|(_, notes)| notes).unwrap_or_default())
    }

    /// Spell every degree on the letter cycle starting at `anchor`.
    fn spell_on(&self, anchor: Pitch) -> Result<Vec<Note>, TheoryError> {
        let ring = letter_ring(anchor);
        self.formula_numeric()
            .iter()
            .zip(self.pitch_indices())
            .map(|(step, actual)| {
                let letter = ring[(step.degree as usize - 1) % ring.len()];
                let shift = Pitch::diff(actual, letter.index);
                Note::from_pitch(letter, shift)
            })
            .collect()
    }
}

/// The seven natural pitch classes rotated so `anchor` comes first.
/// `anchor` must be natural.
fn letter_ring(anchor: Pitch) -> Vec<Pitch> {
    let mut ring: Vec<Pitch> = Pitch::all().iter().filter(|p| p.natural).copied().collect();
    for _ in 0..ring.len() {
        if ring[0].index == anchor.index {
            break;
        }
        ring.rotate_left(1);
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(tonic: &str, steps: &[u8]) -> Scale {
        Scale::new("test", "Test", "Test family", steps.to_vec(), tonic).unwrap()
    }

    fn names(scale: &Scale) -> Vec<String> {
        scale.notes().unwrap().iter().map(|n| n.name()).collect()
    }

    #[test]
    fn test_new_rejects_open_octave() {
        let result = Scale::new("test", "Test", "Test family", vec![2, 2, 1, 2, 2, 2], "c");
        assert!(matches!(result, Err(TheoryError::InvalidScale(_))));

        let result = Scale::new("test", "Test", "Test family", vec![], "c");
        assert!(matches!(result, Err(TheoryError::InvalidScale(_))));
    }

    #[test]
    fn test_new_checks_steps_before_tonic() {
        let result = Scale::new("test", "Test", "Test family", vec![1], "x");
        assert!(matches!(result, Err(TheoryError::InvalidScale(_))));

        let result = Scale::new("test", "Test", "Test family", vec![12], "x");
        assert!(matches!(
            result,
            Err(TheoryError::NotFound { kind: "pitch", .. })
        ));
    }

    #[test]
    fn test_rotate_steps() {
        assert_eq!(rotate_steps(&[2, 2, 1, 2, 2, 2, 1], 1), vec![2, 1, 2, 2, 2, 1, 2]);
        assert_eq!(rotate_steps(&[2, 2, 3, 2, 3], 4), vec![3, 2, 2, 3, 2]);
        assert_eq!(rotate_steps(&[1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(rotate_steps(&[1, 2, 3], 5), vec![3, 1, 2]);
        assert_eq!(rotate_steps(&[], 3), Vec::<u8>::new());
    }

    #[test]
    fn test_semitones_and_pitch_indices() {
        let major = scale("c", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(major.semitones(), vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(major.pitch_indices(), vec![3, 5, 7, 8, 10, 0, 2]);
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            scale("c", &[2, 2, 1, 2, 2, 2, 1]).kind(),
            Some(ScaleKind::Heptatonic)
        );
        assert_eq!(
            scale("a", &[3, 2, 2, 3, 2]).kind(),
            Some(ScaleKind::Pentatonic)
        );
        assert_eq!(
            scale("a", &[3, 2, 1, 1, 3, 2]).kind(),
            Some(ScaleKind::Hexatonic)
        );
        assert_eq!(
            scale("c", &[2, 1, 2, 1, 2, 1, 2, 1]).kind(),
            Some(ScaleKind::Octatonic)
        );
        assert_eq!(scale("c", &[1; 12]).kind(), Some(ScaleKind::Chromatic));
        assert_eq!(scale("c", &[3, 3, 3, 3]).kind(), None);
    }

    #[test]
    fn test_intervals() {
        let major = scale("c", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(
            major.intervals(),
            vec!["P1", "M2", "M3", "P4", "P5", "M6", "M7"]
        );

        let minor = scale("a", &[2, 1, 2, 2, 1, 2, 2]);
        assert_eq!(
            minor.intervals(),
            vec!["P1", "M2", "m3", "P4", "P5", "m6", "m7"]
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(scale("c", &[2, 2, 1, 2, 2, 2, 1]).number(), "101010110101");
        assert_eq!(scale("c", &[1; 12]).number(), "111111111111");
        assert_eq!(scale("g", &[2, 2, 2, 2, 2, 2]).number(), "010101010101");
    }

    #[test]
    fn test_formula_heptatonic() {
        let major = scale("c", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(
            major.formula().unwrap(),
            vec!["1", "2", "3", "4", "5", "6", "7"]
        );

        let harmonic_minor = scale("a", &[2, 1, 2, 2, 1, 3, 1]);
        assert_eq!(
            harmonic_minor.formula().unwrap(),
            vec!["1", "2", "♭3", "4", "5", "♭6", "7"]
        );
    }

    #[test]
    fn test_formula_by_semitone_lookup() {
        let minor_pentatonic = scale("a", &[3, 2, 2, 3, 2]);
        assert_eq!(
            minor_pentatonic.formula().unwrap(),
            vec!["1", "♭3", "4", "5", "♭7"]
        );

        let whole_tone = scale("c", &[2, 2, 2, 2, 2, 2]);
        assert_eq!(
            whole_tone.formula().unwrap(),
            vec!["1", "2", "3", "♭5", "♭6", "♭7"]
        );
    }

    #[test]
    fn test_formula_shift_out_of_symbols() {
        // Positional mapping puts the second degree four semitones sharp.
        let skewed = scale("c", &[6, 1, 1, 1, 1, 1, 1]);
        assert!(matches!(skewed.formula(), Err(TheoryError::ShiftRange(4))));
        // The numeric formula itself is always available.
        assert_eq!(
            skewed.formula_numeric()[1],
            FormulaStep { degree: 2, shift: 4 }
        );
    }

    #[test]
    fn test_notes_natural_tonic() {
        let major = scale("c", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(names(&major), vec!["C", "D", "E", "F", "G", "A", "B"]);

        let minor = scale("a", &[2, 1, 2, 2, 1, 2, 2]);
        assert_eq!(names(&minor), vec!["A", "B", "C", "D", "E", "F", "G"]);

        let d_major = scale("d", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(names(&d_major), vec!["D", "E", "F♯", "G", "A", "B", "C♯"]);
    }

    #[test]
    fn test_notes_flat_side_wins_on_cost() {
        // C♯ major would need seven sharps; D♭ major needs five flats.
        let scale = scale("c#", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(names(&scale), vec!["D♭", "E♭", "F", "G♭", "A♭", "B♭", "C"]);
    }

    #[test]
    fn test_notes_sharp_side_wins_tie() {
        // F♯ major and G♭ major both cost six accidentals; the flat-side
        // anchor F comes first and is kept.
        let scale = scale("f#", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(names(&scale), vec!["F♯", "G♯", "A♯", "B", "C♯", "D♯", "E♯"]);
    }

    #[test]
    fn test_notes_eb_major_beats_ds_major() {
        let scale = scale("d#", &[2, 2, 1, 2, 2, 2, 1]);
        assert_eq!(names(&scale), vec!["E♭", "F", "G", "A♭", "B♭", "C", "D"]);
    }

    #[test]
    fn test_notes_skip_letters_for_small_scales() {
        let minor_pentatonic = scale("a", &[3, 2, 2, 3, 2]);
        assert_eq!(names(&minor_pentatonic), vec!["A", "C", "D", "E", "G"]);

        // The hexatonic blues scale repeats the letter E as E♭ then E.
        let blues = scale("a", &[3, 2, 1, 1, 3, 2]);
        assert_eq!(names(&blues), vec!["A", "C", "D", "E♭", "E", "G"]);
    }

    #[test]
    fn test_notes_sound_as_the_scale_pitches() {
        let scale = scale("f#", &[2, 1, 2, 2, 1, 3, 1]);
        let sounding: Vec<u8> = scale
            .notes()
            .unwrap()
            .iter()
            .map(|n| n.pitch_index())
            .collect();
        assert_eq!(sounding, scale.pitch_indices());
    }
}
