//! Serializable report types.
//!
//! Reports are flat, display-ready views of the engine types: every pitch is
//! already spelled, every formula rendered. They exist so frontends and the
//! command line can serialize one structure instead of re-deriving scale
//! views in the right order.

use serde::Serialize;

use crate::catalog;
use crate::chord::{self, Chord};
use crate::error::TheoryError;
use crate::fretboard::Fretboard;
use crate::pitch::Pitch;
use crate::scale::Scale;

/// One row of the pitch-class table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchReport {
    pub index: u8,
    pub id: String,
    pub name: String,
    pub natural: bool,
}

impl PitchReport {
    /// The whole pitch-class table in index order.
    pub fn all() -> Vec<PitchReport> {
        Pitch::all()
            .iter()
            .map(|p| PitchReport {
                index: p.index,
                id: p.id.to_string(),
                name: p.name.to_string(),
                natural: p.natural,
            })
            .collect()
    }
}

/// A scale family and its modes, as listed by the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyReport {
    pub id: String,
    pub name: String,
    pub steps: Vec<u8>,
    pub modes: Vec<ModeReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeReport {
    pub id: String,
    pub name: String,
}

impl FamilyReport {
    /// Every family in the catalog, in catalog order.
    pub fn all() -> Vec<FamilyReport> {
        catalog::families()
            .iter()
            .map(|family| FamilyReport {
                id: family.id.to_string(),
                name: family.name.to_string(),
                steps: family.steps.to_vec(),
                modes: family
                    .modes
                    .iter()
                    .map(|mode| ModeReport {
                        id: mode.id.to_string(),
                        name: mode.name.to_string(),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Full description of one scale on one tonic.
///
/// # Fields
/// - `tonic`: display name of the tonic pitch class (both spellings for
///   non-natural tonics, e.g. "C♯/D♭")
/// - `kind`: size classification, absent for unconventional degree counts
/// - `number`: 12-bit occupancy mask as a binary string
/// - `formula`: rendered degree tokens ("1", "♭3", ...)
/// - `notes`: spelled note names in degree order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleReport {
    pub id: String,
    pub name: String,
    pub family: String,
    pub tonic: String,
    pub kind: Option<String>,
    pub steps: Vec<u8>,
    pub semitones: Vec<u8>,
    pub pitch_indices: Vec<u8>,
    pub intervals: Vec<String>,
    pub number: String,
    pub formula: Vec<String>,
    pub notes: Vec<String>,
}

impl ScaleReport {
    pub fn new(scale: &Scale) -> Result<ScaleReport, TheoryError> {
        let notes = scale.notes()?;
        Ok(ScaleReport {
            id: scale.id.clone(),
            name: scale.name.clone(),
            family: scale.family.clone(),
            tonic: scale.tonic_pitch().name.to_string(),
            kind: scale.kind().map(|k| k.name().to_string()),
            steps: scale.steps.clone(),
            semitones: scale.semitones(),
            pitch_indices: scale.pitch_indices(),
            intervals: scale.intervals().iter().map(|i| i.to_string()).collect(),
            number: scale.number(),
            formula: scale.formula()?,
            notes: notes.iter().map(|n| n.name()).collect(),
        })
    }
}

/// A named chord with its spelled notes and degree tokens. `root` repeats
/// the first note's name; chord tables show it as its own column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordReport {
    pub root: String,
    pub name: String,
    pub notes: Vec<String>,
    pub formula: Vec<String>,
}

impl ChordReport {
    pub fn from_chord(chord: &Chord) -> ChordReport {
        ChordReport {
            root: chord.root().map(|n| n.name()).unwrap_or_default(),
            name: chord.name.clone(),
            notes: chord.notes.iter().map(|n| n.name()).collect(),
            formula: chord.formula(),
        }
    }
}

/// A scale plus every chord stacked on its degrees.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleChordsReport {
    pub scale: ScaleReport,
    pub chords: Vec<ChordReport>,
}

impl ScaleChordsReport {
    pub fn new(scale: &Scale) -> Result<ScaleChordsReport, TheoryError> {
        let chords = chord::chords_for_scale(scale)?;
        Ok(ScaleChordsReport {
            scale: ScaleReport::new(scale)?,
            chords: chords.iter().map(ChordReport::from_chord).collect(),
        })
    }
}

/// One scale position on one string.
///
/// # Fields
/// - `fret`: fret number, 0 for the open string
/// - `note`: the spelled scale note sounding there
/// - `degree`: that note's formula token
/// - `tonic`: whether the position sounds the tonic pitch class
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretMarker {
    pub fret: u8,
    pub note: String,
    pub degree: String,
    pub tonic: bool,
}

/// All scale positions on one string, low fret first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringLane {
    pub open: String,
    pub markers: Vec<FretMarker>,
}

/// A scale mapped onto a fretboard, string by string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardReport {
    pub scale: ScaleReport,
    pub tuning: Vec<String>,
    pub num_frets: u8,
    pub strings: Vec<StringLane>,
}

impl FretboardReport {
    pub fn new(scale: &Scale, fretboard: &Fretboard) -> Result<FretboardReport, TheoryError> {
        let notes = scale.notes()?;
        let formula = scale.formula()?;
        let indices = scale.pitch_indices();
        let tonic_index = scale.tonic.pitch_index();

        let mut strings = Vec::with_capacity(fretboard.num_strings());
        for (string, open) in fretboard.strings().iter().enumerate() {
            let mut markers = Vec::new();
            for fret in 0..=fretboard.num_frets() {
                let sounding = fretboard.note_at(string, fret)?.pitch_index();
                if let Some(degree) = indices.iter().position(|&i| i == sounding) {
                    markers.push(FretMarker {
                        fret,
                        note: notes[degree].name(),
                        degree: formula[degree].clone(),
                        tonic: sounding == tonic_index,
                    });
                }
            }
            strings.push(StringLane {
                open: open.id.to_string(),
                markers,
            });
        }

        Ok(FretboardReport {
            scale: ScaleReport::new(scale)?,
            tuning: fretboard.strings().iter().map(|p| p.id.to_string()).collect(),
            num_frets: fretboard.num_frets(),
            strings,
        })
    }
}
