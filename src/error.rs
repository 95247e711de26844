use thiserror::Error;

/// Errors raised by the theory engine.
///
/// Every failure is reported at the point of violation and propagates to the
/// caller unchanged; batch operations such as chord listing abort on the first
/// failing element instead of substituting placeholders.
#[derive(Error, Debug)]
pub enum TheoryError {
    /// An id lookup missed its table (pitch ids, scale ids, string numbers).
    #[error("unknown {kind} id '{id}'")]
    NotFound { kind: &'static str, id: String },

    /// A step pattern violates a scale construction invariant.
    #[error("invalid scale: {0}")]
    InvalidScale(String),

    /// A note set does not fit the chord-name grammar.
    #[error("invalid chord: {0}")]
    InvalidChord(String),

    /// An accidental shift fell outside double-flat..double-sharp.
    #[error("accidental shift {0} is out of range")]
    ShiftRange(i8),

    /// A tuning file could not be parsed or describes no strings.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}
