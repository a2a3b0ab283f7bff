use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gives a record its integer identity. Every collection keys membership,
/// lookup and selection on this id alone.
pub trait Identified {
    const ENTITY: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjection {
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub outlook: String,
    #[serde(default)]
    pub demand: String,
}

/// A recommended career path. Fields the upstream data may omit default
/// to empty rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    #[serde(rename = "Id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Assessment match, 0-100.
    #[serde(default)]
    pub match_score: u8,
    /// Display string, e.g. "$50,000 - $70,000".
    #[serde(default)]
    pub avg_salary: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// "High" | "Above Average" | "Average".
    #[serde(default)]
    pub growth_rate: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub growth_projection: Option<GrowthProjection>,
}

impl Identified for CareerRecord {
    const ENTITY: &'static str = "Career";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(rename = "Id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Display string, e.g. "$95k - $120k".
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
}

impl Identified for JobRecord {
    const ENTITY: &'static str = "Job";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    #[serde(rename = "Id")]
    pub id: u32,
    pub title: String,
    /// "course" | "book" | "project" | "certification".
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Identified for LearningResource {
    const ENTITY: &'static str = "Learning resource";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// The assessment wizard payload. The core only round-trips this through
/// the state store; it never inspects individual answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentData {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub work_style: String,
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub salary_expectation: String,
}

/// Persisted learning-plan progress: completed resource ids plus the date
/// the plan was started, so elapsed study days come from a real date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProgress {
    #[serde(default)]
    pub completed: Vec<u32>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}
