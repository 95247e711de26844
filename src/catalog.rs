//! The built-in scale catalog: families, their modes, and lookup by mode id.

use crate::error::TheoryError;
use crate::scale::{rotate_steps, Scale};

/// A named mode of a scale family.
#[derive(Debug, Clone, Copy)]
pub struct ModeDef {
    pub id: &'static str,
    pub name: &'static str,
}

/// A scale family: a base step pattern plus the modes obtained by rotating
/// it. The mode at position `i` uses the family steps rotated left by `i`.
#[derive(Debug, Clone, Copy)]
pub struct ScaleFamily {
    pub id: &'static str,
    pub name: &'static str,
    pub steps: &'static [u8],
    pub modes: &'static [ModeDef],
}

const FAMILIES: [ScaleFamily; 8] = [
    ScaleFamily {
        id: "major",
        name: "Diatonic family",
        steps: &[2, 2, 1, 2, 2, 2, 1],
        modes: &[
            ModeDef { id: "ionian", name: "Ionian (Major)" },
            ModeDef { id: "dorian", name: "Dorian" },
            ModeDef { id: "phrygian", name: "Phrygian" },
            ModeDef { id: "lydian", name: "Lydian" },
            ModeDef { id: "mixolydian", name: "Mixolydian" },
            ModeDef { id: "aeolian", name: "Aeolian (Minor)" },
            ModeDef { id: "locrian", name: "Locrian" },
        ],
    },
    ScaleFamily {
        id: "harmonic_minor",
        name: "Harmonic Minor family",
        steps: &[2, 1, 2, 2, 1, 3, 1],
        modes: &[
            ModeDef { id: "harmonic_minor", name: "Harmonic Minor" },
            ModeDef { id: "locrian_6", name: "Locrian ♮6" },
            ModeDef { id: "ionian_#5", name: "Ionian ♯5" },
            ModeDef { id: "dorian_#4", name: "Dorian ♯4 (Ukrainian Dorian)" },
            ModeDef { id: "phrygian_3", name: "Phrygian ♮3 (Phrygian Dominant)" },
            ModeDef { id: "lydian_#2", name: "Lydian ♯2 (Hungarian Major)" },
            ModeDef { id: "super_locrian_bb7", name: "Super Locrian 𝄫7" },
        ],
    },
    ScaleFamily {
        id: "melodic_minor",
        name: "Melodic Minor family",
        steps: &[2, 1, 2, 2, 2, 2, 1],
        modes: &[
            ModeDef { id: "melodic_minor", name: "Melodic Minor" },
            ModeDef { id: "phrygian_#6", name: "Phrygian ♯6 (Assyrian)" },
            ModeDef { id: "lydian_#5", name: "Lydian ♯5" },
            ModeDef { id: "mixolydian_#4", name: "Mixolydian ♯4 (Overtone)" },
            ModeDef { id: "mixolydian_b6", name: "Mixolydian ♭6 (Melodic Major)" },
            ModeDef { id: "locrian_2", name: "Locrian ♮2 (Half-Diminished)" },
            ModeDef { id: "super_locrian", name: "Super Locrian (Altered Dominant)" },
        ],
    },
    ScaleFamily {
        id: "double_harmonic",
        name: "Double Harmonic family",
        steps: &[1, 3, 1, 2, 1, 3, 1],
        modes: &[
            ModeDef { id: "double_harmonic_major", name: "Double Harmonic (Gypsy) Major" },
            ModeDef { id: "lydian_#2_#6", name: "Lydian ♯2 ♯6" },
            ModeDef { id: "ultraphrygian", name: "Ultraphrygian" },
            ModeDef { id: "hungarian_minor", name: "Hungarian (Gypsy) Minor" },
            ModeDef { id: "oriental", name: "Oriental" },
            ModeDef { id: "ionian_#2_#5", name: "Ionian ♯2 ♯5" },
            ModeDef { id: "locrian_bb3_bb7", name: "Locrian 𝄫3 𝄫7" },
        ],
    },
    ScaleFamily {
        id: "major_pentatonic",
        name: "Major Pentatonic family",
        steps: &[2, 2, 3, 2, 3],
        modes: &[
            ModeDef { id: "major_pentatonic", name: "Major Pentatonic (Ionian)" },
            ModeDef { id: "egyptian_suspended", name: "Egyptian Suspended (Dorian)" },
            ModeDef { id: "blues_minor", name: "Blues Minor (Phrygian)" },
            ModeDef { id: "blues_major", name: "Blues Major (Mixolydian)" },
            ModeDef { id: "minor_pentatonic", name: "Minor Pentatonic (Aeolian)" },
        ],
    },
    ScaleFamily {
        id: "hexatonic_blues_scale",
        name: "Hexatonic Blues Family",
        steps: &[3, 2, 1, 1, 3, 2],
        modes: &[
            ModeDef { id: "minor_hexatonic_blues", name: "Minor Hexatonic Blues" },
            ModeDef { id: "major_hexatonic_blues", name: "Major Hexatonic Blues" },
        ],
    },
    ScaleFamily {
        id: "diminished",
        name: "Diminished (Whole-Half) family",
        steps: &[2, 1, 2, 1, 2, 1, 2, 1],
        modes: &[
            ModeDef { id: "diminished_mode_1", name: "Diminished (Whole-Half) mode 1" },
            ModeDef { id: "diminished_mode_2", name: "Diminished (Whole-Half) mode 2" },
        ],
    },
    ScaleFamily {
        id: "whole_tone",
        name: "Whole Tone family",
        steps: &[2, 2, 2, 2, 2, 2],
        modes: &[
            ModeDef { id: "whole_tone", name: "Whole Tone" },
        ],
    },
];

/// All scale families in catalog order.
pub fn families() -> &'static [ScaleFamily] {
    &FAMILIES
}

/// Build the scale for a mode id on the given tonic.
pub fn scale_by_id(id: &str, tonic_id: &str) -> Result<Scale, TheoryError> {
    for family in FAMILIES.iter() {
        for (i, mode) in family.modes.iter().enumerate() {
            if mode.id == id {
                let steps = rotate_steps(family.steps, i);
                return Scale::new(mode.id, mode.name, family.name, steps, tonic_id);
            }
        }
    }
    Err(TheoryError::NotFound {
        kind: "scale",
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Pitch;
    use std::collections::HashSet;

    #[test]
    fn test_every_family_closes_the_octave() {
        for family in families() {
            let sum: u32 = family.steps.iter().map(|&s| s as u32).sum();
            assert_eq!(sum, 12, "family {}", family.id);
            assert!(
                family.modes.len() <= family.steps.len(),
                "family {} has more modes than rotations",
                family.id
            );
        }
    }

    #[test]
    fn test_mode_ids_are_unique() {
        let mut seen = HashSet::new();
        for family in families() {
            for mode in family.modes {
                assert!(seen.insert(mode.id), "duplicate mode id {}", mode.id);
            }
        }
    }

    #[test]
    fn test_scale_by_id_rotates_family_steps() {
        let dorian = scale_by_id("dorian", "d").unwrap();
        assert_eq!(dorian.steps, vec![2, 1, 2, 2, 2, 1, 2]);
        assert_eq!(dorian.name, "Dorian");
        assert_eq!(dorian.family, "Diatonic family");

        // The catalog mode matches a scale built from the rotated steps.
        let direct = Scale::new(
            "dorian",
            "Dorian",
            "Diatonic family",
            rotate_steps(&[2, 2, 1, 2, 2, 2, 1], 1),
            "d",
        )
        .unwrap();
        assert_eq!(dorian.pitch_indices(), direct.pitch_indices());
        assert_eq!(dorian, direct);

        let minor_pentatonic = scale_by_id("minor_pentatonic", "a").unwrap();
        assert_eq!(minor_pentatonic.steps, vec![3, 2, 2, 3, 2]);

        let aeolian = scale_by_id("aeolian", "a").unwrap();
        assert_eq!(aeolian.steps, vec![2, 1, 2, 2, 1, 2, 2]);

        let super_locrian = scale_by_id("super_locrian", "c").unwrap();
        assert_eq!(super_locrian.steps, vec![1, 2, 1, 2, 2, 2, 2]);
        assert_eq!(super_locrian.semitones(), vec![0, 1, 3, 4, 6, 8, 10]);
    }

    #[test]
    fn test_scale_by_id_unknown() {
        assert!(matches!(
            scale_by_id("mystery", "c"),
            Err(TheoryError::NotFound { kind: "scale", .. })
        ));
        assert!(matches!(
            scale_by_id("ionian", "x"),
            Err(TheoryError::NotFound { kind: "pitch", .. })
        ));
    }

    #[test]
    fn test_super_locrian_bb7_formula() {
        let scale = scale_by_id("super_locrian_bb7", "b").unwrap();
        assert_eq!(
            scale.formula().unwrap(),
            vec!["1", "♭2", "♭3", "♭4", "♭5", "♭6", "𝄫7"]
        );
    }

    #[test]
    fn test_every_mode_spells_on_every_tonic() {
        // Spelling evaluates every anchor candidate and fails if any of
        // them needs a triple accidental, which rules out two pairings.
        let unspellable = [("lydian_#2_#6", "a#"), ("locrian_bb3_bb7", "f#")];
        for family in families() {
            for mode in family.modes {
                for pitch in Pitch::all() {
                    let scale = scale_by_id(mode.id, pitch.id).unwrap();
                    if unspellable.contains(&(mode.id, pitch.id)) {
                        assert!(matches!(
                            scale.notes(),
                            Err(TheoryError::ShiftRange(_))
                        ));
                    } else {
                        let notes = scale.notes().unwrap();
                        assert_eq!(notes.len(), scale.steps.len());
                    }
                }
            }
        }
    }

    #[test]
    fn test_spelling_fails_when_an_anchor_needs_a_triple_accidental() {
        // On a# the A anchor puts the sixth degree of lydian_#2_#6 three
        // semitones above F.
        let scale = scale_by_id("lydian_#2_#6", "a#").unwrap();
        assert!(matches!(scale.notes(), Err(TheoryError::ShiftRange(3))));

        // On f# the G anchor puts the third degree of locrian_bb3_bb7
        // three semitones below B; the G candidate fails even though the
        // F candidate spells cleanly.
        let scale = scale_by_id("locrian_bb3_bb7", "f#").unwrap();
        assert!(matches!(scale.notes(), Err(TheoryError::ShiftRange(-3))));
    }
}
