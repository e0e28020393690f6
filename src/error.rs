use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("save data must be {expected} bytes long; got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    #[error("neither save block is valid\nThe save is corrupted, or it isn't a save file at all")]
    NoValidBlock,

    #[error("section id {0} is out of range or appears twice in the same block")]
    UnknownSection(u16),

    #[error("box storage is {actual} bytes long; expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("cannot hide data inside {needed} records; the limit is {available}")]
    CapacityExceeded { needed: usize, available: usize },

    #[error("record {index} did not read back the data that was written to it")]
    RoundTripFailure { index: usize },

    #[error("the last record is not an egg\nThis save most likely doesn't have a payload hidden in it")]
    NotEggTerminated,

    #[error("{field} must be from {min} to {max}; got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("names are limited to 10 characters; got {0}")]
    NameTooLong(usize),

    #[error("species {0} has no growth rate")]
    UnknownSpecies(u16),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn out_of_range(field: &'static str, value: u32, min: u32, max: u32) -> Self {
        Error::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// True for errors caused by the save layout itself rather than by the caller.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::InvalidSize { .. }
                | Error::NoValidBlock
                | Error::UnknownSection(_)
                | Error::SizeMismatch { .. }
        )
    }
}
