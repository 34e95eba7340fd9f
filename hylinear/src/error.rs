use thiserror::Error;

/// Recoverable errors raised at the edges of the crate (configuration, I/O, user input).
///
/// Misuse of a linear handle is not represented here: see [`ContractViolation`].
#[derive(Debug, Error)]
pub enum LinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file '{file}': {source}")]
    ConfigParse {
        source: toml::de::Error,
        file: String,
    },

    #[error("Embedded sentinel (zero code unit) at position {position}")]
    EmbeddedSentinel { position: usize },

    #[error("Invalid packed word '{0}'")]
    InvalidWord(String),

    #[error("Unknown program '{0}'")]
    UnknownProgram(String),

    #[error("Repetition count {count} exceeds the limit of {max}")]
    CountTooLarge { count: u32, max: u32 },
}

pub type LinResult<T> = Result<T, LinError>;

/// Ill-formed use of a linear value.
///
/// These are programming errors, never returned as `Err`. They surface as a panic carrying
/// the message `contract violation: ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("handle consumed twice without an intervening duplicate")]
    HandleReused,

    #[error("destructure applied to a non-pair value ({0})")]
    NotAPair(&'static str),

    #[error("application of a non-function value ({0})")]
    NotAFunction(&'static str),

    #[error("atom expected, found {0}")]
    NotAnAtom(&'static str),

    #[error("tuple has fewer components than requested")]
    TupleTooShort,
}

#[cold]
#[track_caller]
pub(crate) fn violate(violation: ContractViolation) -> ! {
    panic!("contract violation: {violation}")
}
