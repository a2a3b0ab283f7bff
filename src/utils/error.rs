use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {field}: {message}")]
    Config { field: String, message: String },

    #[error("{entity} with Id {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    #[error("Remote operation failed: {message}")]
    Remote { message: String },

    #[error("State storage error: {message}")]
    State { message: String },
}

pub type Result<T> = std::result::Result<T, CompassError>;
