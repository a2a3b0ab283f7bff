use crate::domain::model::{CareerRecord, Identified, JobRecord, LearningResource};
use crate::domain::ports::RecordStore;
use crate::utils::error::{CompassError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::Mutex;

static CAREERS_JSON: &str = include_str!("../../data/careers.json");
static JOBS_JSON: &str = include_str!("../../data/jobs.json");
static LEARNING_JSON: &str = include_str!("../../data/learning.json");

// Per-operation delays matching the fixture service this replaces.
const GET_ALL_DELAY_MS: u64 = 300;
const GET_BY_ID_DELAY_MS: u64 = 200;
const CREATE_DELAY_MS: u64 = 400;
const UPDATE_DELAY_MS: u64 = 300;
const DELETE_DELAY_MS: u64 = 250;

/// In-memory record store seeded from an embedded JSON fixture, with
/// optional simulated network latency per operation.
pub struct LocalStore<T> {
    records: Mutex<Vec<T>>,
    simulate_latency: bool,
}

impl<T> LocalStore<T>
where
    T: Identified + Clone + DeserializeOwned + Send + Sync,
{
    pub fn from_json(fixture: &str, simulate_latency: bool) -> Result<Self> {
        let records: Vec<T> = serde_json::from_str(fixture)?;
        tracing::debug!("Loaded {} {} fixture records", records.len(), T::ENTITY);
        Ok(Self {
            records: Mutex::new(records),
            simulate_latency,
        })
    }

    pub fn from_records(records: Vec<T>, simulate_latency: bool) -> Self {
        Self {
            records: Mutex::new(records),
            simulate_latency,
        }
    }

    async fn pause(&self, ms: u64) {
        if self.simulate_latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl LocalStore<CareerRecord> {
    pub fn careers(simulate_latency: bool) -> Result<Self> {
        Self::from_json(CAREERS_JSON, simulate_latency)
    }
}

impl LocalStore<JobRecord> {
    pub fn jobs(simulate_latency: bool) -> Result<Self> {
        Self::from_json(JOBS_JSON, simulate_latency)
    }
}

impl LocalStore<LearningResource> {
    pub fn learning(simulate_latency: bool) -> Result<Self> {
        Self::from_json(LEARNING_JSON, simulate_latency)
    }
}

#[async_trait]
impl<T> RecordStore<T> for LocalStore<T>
where
    T: Identified + Clone + DeserializeOwned + Send + Sync,
{
    async fn get_all(&self) -> Result<Vec<T>> {
        self.pause(GET_ALL_DELAY_MS).await;
        Ok(self.records.lock().await.clone())
    }

    async fn get_by_id(&self, id: u32) -> Result<T> {
        self.pause(GET_BY_ID_DELAY_MS).await;
        self.records
            .lock()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(CompassError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }

    async fn create(&self, record: T) -> Result<T> {
        self.pause(CREATE_DELAY_MS).await;
        let mut records = self.records.lock().await;
        let next_id = records.iter().map(Identified::id).max().unwrap_or(0) + 1;
        let mut record = record;
        record.set_id(next_id);
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: u32, record: T) -> Result<T> {
        self.pause(UPDATE_DELAY_MS).await;
        let mut records = self.records.lock().await;
        let pos = records
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(CompassError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        let mut record = record;
        record.set_id(id);
        records[pos] = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: u32) -> Result<T> {
        self.pause(DELETE_DELAY_MS).await;
        let mut records = self.records.lock().await;
        let pos = records
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(CompassError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        Ok(records.remove(pos))
    }
}
