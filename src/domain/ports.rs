use crate::utils::error::{CompassError, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::str::FromStr;

/// Which data-source implementation backs the record stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Embedded JSON fixtures with simulated latency.
    Local,
    /// Hosted records API over HTTP.
    Remote,
}

impl FromStr for Backend {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Backend::Local),
            "remote" => Ok(Backend::Remote),
            other => Err(CompassError::Config {
                field: "backend".to_string(),
                message: format!("Unknown backend: {} (expected local or remote)", other),
            }),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Local => write!(f, "local"),
            Backend::Remote => write!(f, "remote"),
        }
    }
}

/// Asynchronous CRUD contract shared by both data-source implementations.
/// Lookup on an absent id is `CompassError::NotFound`; everything else
/// surfaces as a retryable error to the caller.
#[async_trait]
pub trait RecordStore<T>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>>;
    async fn get_by_id(&self, id: u32) -> Result<T>;
    async fn create(&self, record: T) -> Result<T>;
    async fn update(&self, id: u32, record: T) -> Result<T>;
    async fn delete(&self, id: u32) -> Result<T>;
}

/// Typed key-value persistence for lightweight app state (the browser
/// localStorage stand-in). Missing keys read as `None`, never an error.
pub trait StateStore: Send + Sync {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;
    fn clear(&self, key: &str) -> Result<()>;
}

/// Well-known state-store keys.
pub mod state_keys {
    pub const ASSESSMENT: &str = "assessmentData";
    pub const SELECTED_CAREER: &str = "selectedCareerPath";
    pub const LEARNING_PROGRESS: &str = "learningProgress";
}

pub trait ConfigProvider: Send + Sync {
    fn backend(&self) -> Backend;
    fn api_endpoint(&self) -> &str;
    fn state_dir(&self) -> &str;
    fn simulate_latency(&self) -> bool;
}
