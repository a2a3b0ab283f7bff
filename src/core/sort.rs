use crate::domain::model::CareerRecord;
use crate::utils::error::CompassError;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    MatchScore,
    Salary,
    Growth,
}

impl FromStr for SortKey {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "match-score" => Ok(SortKey::MatchScore),
            "salary" => Ok(SortKey::Salary),
            "growth" => Ok(SortKey::Growth),
            other => Err(CompassError::Config {
                field: "sort".to_string(),
                message: format!(
                    "Unknown sort key: {} (expected title, match-score, salary or growth)",
                    other
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Caller-held sort state with the column-header toggle rule: re-applying
/// the current key flips the order, a new key resets to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::MatchScore,
            order: SortOrder::Desc,
        }
    }
}

impl SortState {
    pub fn apply(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.flip();
        } else {
            self.key = key;
            self.order = SortOrder::Desc;
        }
    }
}

/// Salary sort value: every ASCII digit of the display string concatenated
/// into one integer. "$50,000 - $70,000" therefore reads as 5000070000,
/// conflating ranges; kept as-is to match the comparison table's behavior.
pub fn salary_digits(display: &str) -> u64 {
    display
        .chars()
        .filter(|c| c.is_ascii_digit())
        .fold(0u64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(c as u8 - b'0'))
        })
}

/// Fixed growth-rate ranking; unknown values rank below "Average".
pub fn growth_ordinal(rate: &str) -> u8 {
    match rate {
        "High" => 3,
        "Above Average" => 2,
        "Average" => 1,
        _ => 0,
    }
}

/// Stable sort into a new vector; ties keep their input order.
pub fn sort_careers(records: &[CareerRecord], key: SortKey, order: SortOrder) -> Vec<CareerRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &CareerRecord, b: &CareerRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::MatchScore => a.match_score.cmp(&b.match_score),
        SortKey::Salary => salary_digits(&a.avg_salary).cmp(&salary_digits(&b.avg_salary)),
        SortKey::Growth => growth_ordinal(&a.growth_rate).cmp(&growth_ordinal(&b.growth_rate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(id: u32, title: &str, score: u8, salary: &str, growth: &str) -> CareerRecord {
        CareerRecord {
            id,
            title: title.to_string(),
            match_score: score,
            avg_salary: salary.to_string(),
            growth_rate: growth.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_salary_digits_concatenates_ranges() {
        assert_eq!(salary_digits("$50,000 - $70,000"), 5_000_070_000);
        assert_eq!(salary_digits("$80,000+"), 80_000);
        assert_eq!(salary_digits("negotiable"), 0);
    }

    #[test]
    fn test_growth_ordinal() {
        assert_eq!(growth_ordinal("High"), 3);
        assert_eq!(growth_ordinal("Above Average"), 2);
        assert_eq!(growth_ordinal("Average"), 1);
        assert_eq!(growth_ordinal("Declining"), 0);
    }

    #[test]
    fn test_match_score_desc_is_stable() {
        let records = vec![
            career(1, "A", 70, "", ""),
            career(2, "B", 90, "", ""),
            career(3, "C", 90, "", ""),
        ];
        let sorted = sort_careers(&records, SortKey::MatchScore, SortOrder::Desc);
        assert_eq!(sorted.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_growth_sort_desc() {
        let records = vec![
            career(1, "A", 0, "", "Average"),
            career(2, "B", 0, "", "High"),
            career(3, "C", 0, "", "Above Average"),
        ];
        let sorted = sort_careers(&records, SortKey::Growth, SortOrder::Desc);
        let rates: Vec<_> = sorted.iter().map(|c| c.growth_rate.as_str()).collect();
        assert_eq!(rates, vec!["High", "Above Average", "Average"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let records = vec![
            career(1, "data analyst", 0, "", ""),
            career(2, "Accountant", 0, "", ""),
        ];
        let sorted = sort_careers(&records, SortKey::Title, SortOrder::Asc);
        assert_eq!(sorted[0].id, 2);
    }

    #[test]
    fn test_sort_state_toggle() {
        let mut state = SortState::default();
        assert_eq!(state.key, SortKey::MatchScore);
        assert_eq!(state.order, SortOrder::Desc);

        state.apply(SortKey::MatchScore);
        assert_eq!(state.order, SortOrder::Asc);

        state.apply(SortKey::Salary);
        assert_eq!(state.key, SortKey::Salary);
        assert_eq!(state.order, SortOrder::Desc);
    }
}
