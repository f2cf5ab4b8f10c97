use thiserror::Error;

/// Failures turning persisted or user-supplied time data into slot keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed time string '{0}'")]
    MalformedTime(String),

    #[error("time '{time}' is not aligned to the {step}-minute grid")]
    Misaligned { time: String, step: u16 },

    #[error("day index {0} is not configured")]
    UnknownDay(usize),
}

/// Configuration that cannot produce a usable grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be between 1 and 60 minutes, got {0}")]
    StepOutOfRange(u16),

    #[error("step of {0} minutes does not divide an hour evenly")]
    StepNotDivisor(u16),

    #[error("at least one day label is required")]
    NoDays,

    #[error("day label '{0}' appears more than once")]
    DuplicateDay(String),
}
