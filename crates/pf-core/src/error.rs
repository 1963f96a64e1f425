use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug)]
pub enum PfError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Malformed document: {what}")]
    Malformed { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
