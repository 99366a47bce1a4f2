use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("No more elements")]
    NoMoreElements,

    #[error("Iterator remove called without a preceding next")]
    IllegalIteratorState,

    #[error("Unsupported sort field: {0}")]
    UnsupportedField(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("No free ids left in [0, {0})")]
    IdsExhausted(u32),
}

pub type Result<T> = std::result::Result<T, RosterError>;
