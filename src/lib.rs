pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::RemoteConfig;
pub use domain::model::{
    AssessmentData, CareerRecord, JobRecord, LearningResource, SavedProgress,
};
pub use domain::ports::{Backend, ConfigProvider, RecordStore, StateStore};
pub use services::{FileStateStore, LocalStore, RemoteStore};
pub use utils::error::{CompassError, Result};
