pub mod catalog;
pub mod chord;
pub mod error;
pub mod fretboard;
pub mod note;
pub mod pitch;
pub mod report;
pub mod scale;

pub use catalog::{families, scale_by_id, ModeDef, ScaleFamily};
pub use chord::{chords_for_scale, Chord};
pub use error::TheoryError;
pub use fretboard::Fretboard;
pub use note::{Accidental, Note};
pub use pitch::Pitch;
pub use scale::{rotate_steps, FormulaStep, Scale, ScaleKind};

/// Describe a catalog scale on a tonic.
/// This is the main entry point for the library.
pub fn describe_scale(id: &str, tonic: &str) -> Result<report::ScaleReport, TheoryError> {
    report::ScaleReport::new(&catalog::scale_by_id(id, tonic)?)
}

/// Describe a scale together with the chords stacked on its degrees.
pub fn describe_chords(id: &str, tonic: &str) -> Result<report::ScaleChordsReport, TheoryError> {
    report::ScaleChordsReport::new(&catalog::scale_by_id(id, tonic)?)
}

/// Map a catalog scale onto a fretboard.
pub fn describe_fretboard(
    id: &str,
    tonic: &str,
    fretboard: &Fretboard,
) -> Result<report::FretboardReport, TheoryError> {
    report::FretboardReport::new(&catalog::scale_by_id(id, tonic)?, fretboard)
}
