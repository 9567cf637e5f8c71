use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item already exists: {0}")]
    DuplicateItem(String),

    #[error("Item {id} is missing attribute '{attribute}'")]
    MissingAttribute { id: String, attribute: &'static str },

    #[error("Candidate set is empty")]
    EmptyCandidateSet,

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl Error {
    /// Shorthand for a missing price level on `id`
    pub fn missing_price(id: &str) -> Self {
        Error::MissingAttribute { id: id.to_string(), attribute: "price_level" }
    }

    /// Shorthand for a missing average rating on `id`
    pub fn missing_rating(id: &str) -> Self {
        Error::MissingAttribute { id: id.to_string(), attribute: "avg_rating" }
    }
}
