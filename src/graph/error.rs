use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The vertex: '{0}' is not in the graph")]
    UnknownVertex(String),
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
