use crate::domain::model::{CareerRecord, JobRecord};
use regex::Regex;
use std::sync::OnceLock;

/// Active career filters. A zero / empty field means the criterion is off;
/// all active criteria must hold for a record to pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerFilter {
    /// Keep records with `match_score >= min_score`. 0 disables.
    pub min_score: u8,
    /// Substring of the salary display string, e.g. "50k"; matched after
    /// normalization so shorthand and full spellings agree.
    pub salary_range: String,
    /// Exact growth-rate match, e.g. "High".
    pub growth_rate: String,
    /// Case-insensitive substring of the experience level, e.g. "Entry".
    pub experience_level: String,
}

impl CareerFilter {
    pub fn is_active(&self) -> bool {
        self.min_score > 0
            || !self.salary_range.is_empty()
            || !self.growth_rate.is_empty()
            || !self.experience_level.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Case-insensitive substring of title or company.
    pub search: String,
    /// Case-insensitive substring of the location.
    pub location: String,
    /// Substring of the salary display string, normalized like the
    /// career salary filter.
    pub salary_range: String,
}

impl JobFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.location.is_empty() || !self.salary_range.is_empty()
    }
}

/// Salary display strings mix two spellings for the same amount: fixture
/// data writes "$50,000" while the filter presets say "50k". Both sides
/// are normalized (drop `$` and commas, expand the `k` shorthand) before
/// the substring test so "50k" matches "$50,000 - $70,000".
fn normalize_salary(display: &str) -> String {
    static K_SHORTHAND: OnceLock<Regex> = OnceLock::new();
    let re = K_SHORTHAND.get_or_init(|| Regex::new(r"(\d+)k").unwrap());

    let stripped: String = display
        .to_lowercase()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    re.replace_all(&stripped, "${1}000").to_string()
}

fn salary_matches(display: &str, range: &str) -> bool {
    normalize_salary(display).contains(&normalize_salary(range))
}

/// Returns the careers passing every active criterion, in input order.
/// Never mutates the input; no active criterion means an identity copy,
/// and an empty result is a valid outcome rather than an error.
pub fn filter_careers(records: &[CareerRecord], filter: &CareerFilter) -> Vec<CareerRecord> {
    records
        .iter()
        .filter(|career| {
            if filter.min_score > 0 && career.match_score < filter.min_score {
                return false;
            }
            if !filter.salary_range.is_empty()
                && !salary_matches(&career.avg_salary, &filter.salary_range)
            {
                return false;
            }
            if !filter.growth_rate.is_empty() && career.growth_rate != filter.growth_rate {
                return false;
            }
            if !filter.experience_level.is_empty()
                && !career
                    .experience_level
                    .to_lowercase()
                    .contains(&filter.experience_level.to_lowercase())
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Returns the jobs passing every active criterion, in input order.
pub fn filter_jobs(records: &[JobRecord], filter: &JobFilter) -> Vec<JobRecord> {
    let search = filter.search.to_lowercase();
    let location = filter.location.to_lowercase();

    records
        .iter()
        .filter(|job| {
            if !search.is_empty()
                && !job.title.to_lowercase().contains(&search)
                && !job.company.to_lowercase().contains(&search)
            {
                return false;
            }
            if !location.is_empty() && !job.location.to_lowercase().contains(&location) {
                return false;
            }
            if !filter.salary_range.is_empty() && !salary_matches(&job.salary, &filter.salary_range)
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(id: u32, score: u8, salary: &str, growth: &str) -> CareerRecord {
        CareerRecord {
            id,
            title: format!("Career {}", id),
            match_score: score,
            avg_salary: salary.to_string(),
            growth_rate: growth.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_inactive_filter_is_identity() {
        let records = vec![career(1, 70, "$50,000", "High"), career(2, 90, "$80,000+", "Average")];
        let out = filter_careers(&records, &CareerFilter::default());
        assert_eq!(out, records);
    }

    #[test]
    fn test_salary_shorthand_matches_full_spelling() {
        let records = vec![
            career(1, 80, "$50,000 - $70,000", "High"),
            career(2, 80, "$80,000+", "High"),
        ];
        let filter = CareerFilter {
            salary_range: "50k".to_string(),
            ..Default::default()
        };
        let out = filter_careers(&records, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn test_normalize_salary() {
        assert_eq!(normalize_salary("$50,000 - $70,000"), "50000 - 70000");
        assert_eq!(normalize_salary("$95k - $120k"), "95000 - 120000");
        assert!(salary_matches("$95k - $120k", "95k"));
        assert!(!salary_matches("$80,000+", "50k"));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let records = vec![
            career(1, 95, "$100,000", "High"),
            career(2, 95, "$100,000", "Average"),
            career(3, 60, "$100,000", "High"),
        ];
        let filter = CareerFilter {
            min_score: 90,
            growth_rate: "High".to_string(),
            ..Default::default()
        };
        let out = filter_careers(&records, &filter);
        assert_eq!(out.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_job_search_matches_title_or_company() {
        let jobs = vec![
            JobRecord {
                id: 1,
                title: "Data Analyst".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            },
            JobRecord {
                id: 2,
                title: "Designer".to_string(),
                company: "DataWorks".to_string(),
                ..Default::default()
            },
            JobRecord {
                id: 3,
                title: "Plumber".to_string(),
                company: "Pipes Inc".to_string(),
                ..Default::default()
            },
        ];
        let filter = JobFilter {
            search: "data".to_string(),
            ..Default::default()
        };
        let out = filter_jobs(&jobs, &filter);
        assert_eq!(out.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let filter = CareerFilter {
            min_score: 90,
            ..Default::default()
        };
        assert!(filter_careers(&[], &filter).is_empty());
        assert!(filter_jobs(&[], &JobFilter::default()).is_empty());
    }
}
