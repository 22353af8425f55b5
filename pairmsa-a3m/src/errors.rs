use thiserror::Error;

#[derive(Error, Debug)]
pub enum A3mError {
    #[error("Sequence data found before any header at line {line}")]
    DataBeforeHeader { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
