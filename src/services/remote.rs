use crate::domain::model::{CareerRecord, GrowthProjection, Identified, JobRecord, LearningResource};
use crate::domain::ports::RecordStore;
use crate::utils::error::{CompassError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::marker::PhantomData;

/// Mapping between a record type and its hosted-table wire shape. Wire
/// records carry suffixed flat fields (`title_c`); list fields travel as
/// delimited strings. `from_wire` never fails: missing fields default.
pub trait WireFormat: Sized {
    const TABLE: &'static str;
    const FIELDS: &'static [&'static str];

    fn from_wire(value: &Value) -> Self;
    fn to_wire(&self) -> Value;
}

fn wire_str(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn wire_opt_str(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn wire_u32(value: &Value, field: &str) -> u32 {
    value.get(field).and_then(|v| v.as_u64()).unwrap_or(0) as u32
}

fn wire_list(value: &Value, field: &str, separator: char) -> Vec<String> {
    wire_str(value, field)
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

impl WireFormat for CareerRecord {
    const TABLE: &'static str = "career_path_c";
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "title_c",
        "description_c",
        "match_score_c",
        "avg_salary_c",
        "required_skills_c",
        "growth_rate_c",
        "experience_level_c",
        "industry_c",
        "pros_c",
        "cons_c",
        "projection_rate_c",
        "projection_outlook_c",
        "projection_demand_c",
    ];

    fn from_wire(value: &Value) -> Self {
        let projection = GrowthProjection {
            rate: wire_str(value, "projection_rate_c"),
            outlook: wire_str(value, "projection_outlook_c"),
            demand: wire_str(value, "projection_demand_c"),
        };
        let growth_projection = if projection == GrowthProjection::default() {
            None
        } else {
            Some(projection)
        };

        CareerRecord {
            id: wire_u32(value, "Id"),
            title: wire_str(value, "title_c"),
            description: wire_str(value, "description_c"),
            match_score: wire_u32(value, "match_score_c").min(100) as u8,
            avg_salary: wire_str(value, "avg_salary_c"),
            required_skills: wire_list(value, "required_skills_c", ','),
            growth_rate: wire_str(value, "growth_rate_c"),
            experience_level: wire_str(value, "experience_level_c"),
            industry: wire_str(value, "industry_c"),
            pros: wire_list(value, "pros_c", '\n'),
            cons: wire_list(value, "cons_c", '\n'),
            growth_projection,
        }
    }

    fn to_wire(&self) -> Value {
        let projection = self.growth_projection.clone().unwrap_or_default();
        json!({
            "title_c": self.title,
            "description_c": self.description,
            "match_score_c": self.match_score,
            "avg_salary_c": self.avg_salary,
            "required_skills_c": self.required_skills.join(","),
            "growth_rate_c": self.growth_rate,
            "experience_level_c": self.experience_level,
            "industry_c": self.industry,
            "pros_c": self.pros.join("\n"),
            "cons_c": self.cons.join("\n"),
            "projection_rate_c": projection.rate,
            "projection_outlook_c": projection.outlook,
            "projection_demand_c": projection.demand,
        })
    }
}

impl WireFormat for JobRecord {
    const TABLE: &'static str = "job_c";
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "title_c",
        "company_c",
        "location_c",
        "salary_c",
        "requirements_c",
        "url_c",
        "posted_at_c",
    ];

    fn from_wire(value: &Value) -> Self {
        JobRecord {
            id: wire_u32(value, "Id"),
            title: wire_str(value, "title_c"),
            company: wire_str(value, "company_c"),
            location: wire_str(value, "location_c"),
            salary: wire_str(value, "salary_c"),
            requirements: wire_list(value, "requirements_c", ','),
            url: wire_opt_str(value, "url_c"),
            posted_at: wire_opt_str(value, "posted_at_c"),
        }
    }

    fn to_wire(&self) -> Value {
        json!({
            "title_c": self.title,
            "company_c": self.company,
            "location_c": self.location,
            "salary_c": self.salary,
            "requirements_c": self.requirements.join(","),
            "url_c": self.url.clone().unwrap_or_default(),
            "posted_at_c": self.posted_at.clone().unwrap_or_default(),
        })
    }
}

impl WireFormat for LearningResource {
    const TABLE: &'static str = "learning_resource_c";
    const FIELDS: &'static [&'static str] =
        &["Id", "title_c", "type_c", "provider_c", "duration_c", "url_c"];

    fn from_wire(value: &Value) -> Self {
        LearningResource {
            id: wire_u32(value, "Id"),
            title: wire_str(value, "title_c"),
            kind: wire_str(value, "type_c"),
            provider: wire_str(value, "provider_c"),
            duration: wire_str(value, "duration_c"),
            url: wire_opt_str(value, "url_c"),
        }
    }

    fn to_wire(&self) -> Value {
        json!({
            "title_c": self.title,
            "type_c": self.kind,
            "provider_c": self.provider,
            "duration_c": self.duration,
            "url_c": self.url.clone().unwrap_or_default(),
        })
    }
}

/// Record store backed by the hosted records API. One instance per table;
/// requests are JSON POSTs against the SDK-style verb endpoints.
pub struct RemoteStore<T> {
    client: Client,
    endpoint: String,
    headers: Vec<(String, String)>,
    _record: PhantomData<fn() -> T>,
}

impl<T: WireFormat> RemoteStore<T> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            headers: Vec::new(),
            _record: PhantomData,
        }
    }

    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    fn request(&self, action: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), action);
        let mut request = self.client.post(url);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }
        request
    }

    async fn post(&self, action: &str, body: Value) -> Result<Value> {
        tracing::debug!("Calling {} for table {}", action, T::TABLE);
        let response = self.request(action).json(&body).send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

fn first_result(payload: &Value) -> Result<&Value> {
    let result = payload
        .get("results")
        .and_then(|v| v.as_array())
        .and_then(|results| results.first())
        .ok_or_else(|| CompassError::Remote {
            message: "response carried no results".to_string(),
        })?;

    if !result.get("success").and_then(|v| v.as_bool()).unwrap_or(false) {
        let message = result
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("operation rejected")
            .to_string();
        return Err(CompassError::Remote { message });
    }

    result.get("data").ok_or_else(|| CompassError::Remote {
        message: "result carried no data".to_string(),
    })
}

#[async_trait]
impl<T> RecordStore<T> for RemoteStore<T>
where
    T: WireFormat + Identified + Clone + Send + Sync + 'static,
{
    async fn get_all(&self) -> Result<Vec<T>> {
        let body = json!({ "tableName": T::TABLE, "fields": T::FIELDS });
        let payload = self.post("fetchRecords", body).await?;
        let rows = payload
            .get("data")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        Ok(rows.iter().map(T::from_wire).collect())
    }

    async fn get_by_id(&self, id: u32) -> Result<T> {
        let body = json!({ "tableName": T::TABLE, "recordId": id, "fields": T::FIELDS });
        let response = self.request("getRecordById").json(&body).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CompassError::NotFound {
                entity: T::ENTITY,
                id,
            });
        }
        let payload: Value = response.error_for_status()?.json().await?;
        let data = payload.get("data").ok_or_else(|| CompassError::Remote {
            message: "response carried no data".to_string(),
        })?;
        Ok(T::from_wire(data))
    }

    async fn create(&self, record: T) -> Result<T> {
        let body = json!({ "tableName": T::TABLE, "records": [record.to_wire()] });
        let payload = self.post("createRecord", body).await?;
        Ok(T::from_wire(first_result(&payload)?))
    }

    async fn update(&self, id: u32, record: T) -> Result<T> {
        let mut wire = record.to_wire();
        if let Some(fields) = wire.as_object_mut() {
            fields.insert("Id".to_string(), json!(id));
        }
        let body = json!({ "tableName": T::TABLE, "records": [wire] });
        let payload = self.post("updateRecord", body).await?;
        Ok(T::from_wire(first_result(&payload)?))
    }

    async fn delete(&self, id: u32) -> Result<T> {
        // The delete endpoint echoes ids only, so fetch the record first
        // to honor the "returns the deleted record" contract.
        let existing = self.get_by_id(id).await?;
        let body = json!({ "tableName": T::TABLE, "RecordIds": [id] });
        let payload = self.post("deleteRecord", body).await?;
        let succeeded = payload
            .get("results")
            .and_then(|v| v.as_array())
            .and_then(|results| results.first())
            .and_then(|result| result.get("success"))
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !succeeded {
            return Err(CompassError::Remote {
                message: format!("delete of {} {} was rejected", T::TABLE, id),
            });
        }
        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_from_wire_defaults_missing_fields() {
        let wire = json!({ "Id": 7, "title_c": "UX Designer" });
        let career = CareerRecord::from_wire(&wire);
        assert_eq!(career.id, 7);
        assert_eq!(career.title, "UX Designer");
        assert_eq!(career.match_score, 0);
        assert!(career.required_skills.is_empty());
        assert!(career.growth_projection.is_none());
    }

    #[test]
    fn test_career_wire_round_trip() {
        let wire = json!({
            "Id": 3,
            "title_c": "Data Scientist",
            "match_score_c": 92,
            "avg_salary_c": "$95,000 - $130,000",
            "required_skills_c": "Python, Statistics, SQL",
            "growth_rate_c": "High",
            "pros_c": "High demand\nWell paid",
            "projection_rate_c": "22%",
            "projection_outlook_c": "Excellent",
            "projection_demand_c": "Very High",
        });
        let career = CareerRecord::from_wire(&wire);
        assert_eq!(
            career.required_skills,
            vec!["Python", "Statistics", "SQL"]
        );
        assert_eq!(career.pros, vec!["High demand", "Well paid"]);
        let projection = career.growth_projection.as_ref().unwrap();
        assert_eq!(projection.rate, "22%");

        let back = career.to_wire();
        assert_eq!(back["required_skills_c"], "Python,Statistics,SQL");
        assert_eq!(back["pros_c"], "High demand\nWell paid");
    }

    #[test]
    fn test_job_wire_empty_url_reads_as_none() {
        let wire = json!({ "Id": 1, "title_c": "Analyst", "url_c": "" });
        let job = JobRecord::from_wire(&wire);
        assert!(job.url.is_none());
    }
}
