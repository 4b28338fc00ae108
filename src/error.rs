use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read input: {0}")]
    Input(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("no directory named {0:?} under the current directory")]
    UnknownDirectory(String),
    #[error("cannot leave the root directory")]
    NoParentDirectory,
    #[error("used space {used} exceeds disk capacity {capacity}")]
    DiskOverfull { used: u64, capacity: u64 },
    #[error("no directory frees at least {needed} bytes")]
    NoCandidate { needed: u64 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("input has no solution")]
    NoSolution,
}

impl Error {
    /// Builds a [`Error::Parse`] for the 0-based `index` of a line.
    pub fn parse(index: usize, message: impl ToString) -> Self {
        Self::Parse {
            line: index + 1,
            message: message.to_string(),
        }
    }
}
