use thiserror::Error;

use pairmsa_uniprot::{AccessionError, MappingError};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Label {0:?} was not resolved and has no '_' to derive an accession from")]
    MalformedLabel(String),

    #[error(transparent)]
    Accession(#[from] AccessionError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}
