use crate::domain::model::{LearningResource, SavedProgress};
use chrono::{DateTime, Utc};

/// Resources per learning phase; the plan slices the resource list into
/// three consecutive phases of this many entries.
pub const PHASE_SPAN: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

pub const PHASES: [Phase; 3] = [
    Phase {
        id: "foundation",
        title: "Foundation Phase",
        description: "Build core knowledge and fundamental skills",
        duration: "2-4 weeks",
    },
    Phase {
        id: "intermediate",
        title: "Skill Development",
        description: "Develop specialized skills and practical experience",
        duration: "6-8 weeks",
    },
    Phase {
        id: "advanced",
        title: "Advanced Mastery",
        description: "Master advanced concepts and real-world applications",
        duration: "4-6 weeks",
    },
];

/// The slice of resources belonging to a phase, in plan order. Short
/// plans simply yield shorter (possibly empty) phases.
pub fn phase_resources(resources: &[LearningResource], phase_index: usize) -> &[LearningResource] {
    let start = phase_index * PHASE_SPAN;
    let end = (start + PHASE_SPAN).min(resources.len());
    if start >= resources.len() {
        &[]
    } else {
        &resources[start..end]
    }
}

pub fn completed_in_phase(
    resources: &[LearningResource],
    phase_index: usize,
    progress: &SavedProgress,
) -> usize {
    phase_resources(resources, phase_index)
        .iter()
        .filter(|resource| progress.completed.contains(&resource.id))
        .count()
}

/// Completed share of the whole plan, rounded to a whole percent. An
/// empty plan is 0, not a division error.
pub fn overall_percent(resources: &[LearningResource], progress: &SavedProgress) -> u8 {
    if resources.is_empty() {
        return 0;
    }
    let completed = resources
        .iter()
        .filter(|resource| progress.completed.contains(&resource.id))
        .count();
    ((completed * 100 + resources.len() / 2) / resources.len()) as u8
}

/// Whole days since the plan was started, never negative.
pub fn days_studying(progress: &SavedProgress, now: DateTime<Utc>) -> i64 {
    match progress.started_at {
        Some(started) => (now - started).num_days().max(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn plan(count: u32) -> Vec<LearningResource> {
        (1..=count)
            .map(|id| LearningResource {
                id,
                title: format!("Resource {}", id),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_phase_slicing() {
        let resources = plan(12);
        let foundation: Vec<u32> = phase_resources(&resources, 0).iter().map(|r| r.id).collect();
        let advanced: Vec<u32> = phase_resources(&resources, 2).iter().map(|r| r.id).collect();
        assert_eq!(foundation, vec![1, 2, 3, 4]);
        assert_eq!(advanced, vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_short_plan_yields_short_phases() {
        let resources = plan(5);
        assert_eq!(phase_resources(&resources, 1).len(), 1);
        assert!(phase_resources(&resources, 2).is_empty());
    }

    #[test]
    fn test_overall_percent() {
        let resources = plan(12);
        let progress = SavedProgress {
            completed: vec![1, 2, 3],
            started_at: None,
        };
        assert_eq!(overall_percent(&resources, &progress), 25);
        assert_eq!(overall_percent(&[], &progress), 0);
    }

    #[test]
    fn test_completed_in_phase_counts_only_that_phase() {
        let resources = plan(12);
        let progress = SavedProgress {
            completed: vec![1, 2, 9],
            started_at: None,
        };
        assert_eq!(completed_in_phase(&resources, 0, &progress), 2);
        assert_eq!(completed_in_phase(&resources, 1, &progress), 0);
        assert_eq!(completed_in_phase(&resources, 2, &progress), 1);
    }

    #[test]
    fn test_days_studying() {
        let now = Utc::now();
        let progress = SavedProgress {
            completed: vec![],
            started_at: Some(now - Duration::days(10)),
        };
        assert_eq!(days_studying(&progress, now), 10);
        assert_eq!(days_studying(&SavedProgress::default(), now), 0);
    }
}
