use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessionError {
    #[error("Accession {accession:?} has length {length}, expected 6 or 10")]
    UnsupportedLength { accession: String, length: usize },

    #[error("Accession {0:?} does not start with an uppercase letter")]
    UnknownPartition(String),

    #[error("Character {character:?} at index {index} of accession {accession:?} is not allowed at that position")]
    InvalidCharacter {
        accession: String,
        character: char,
        index: usize,
    },
}

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("HTTP status {status} when fetching {url}")]
    Status { status: u16, url: String },

    #[error("Request error when fetching {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Malformed ID mapping response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("ID mapping job {job_id} failed with status {status}")]
    JobFailed { job_id: String, status: String },

    #[error("ID mapping job {job_id} still running after {polls} status checks")]
    JobTimeout { job_id: String, polls: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
