// Filter resolution: the year/month/day choices offered to the page, and the
// selection applied to the individual results.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::models::Sample;

/// Selector value meaning "no constraint" (an empty value means the same).
pub const ANY: &str = "any";

/// Distinct date components present in the full dataset, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// `YYYY`
    pub years: Vec<String>,
    /// `01`..`12`
    pub months: Vec<String>,
    /// `01`..`31`
    pub days: Vec<String>,
}

impl FilterOptions {
    /// Collects the options from every sample, regardless of any applied selection.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut years = BTreeSet::new();
        let mut months = BTreeSet::new();
        let mut days = BTreeSet::new();
        for s in samples {
            years.insert(s.timestamp.format("%Y").to_string());
            months.insert(s.timestamp.format("%m").to_string());
            days.insert(s.timestamp.format("%d").to_string());
        }
        Self {
            years: years.into_iter().collect(),
            months: months.into_iter().collect(),
            days: days.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.months.is_empty() && self.days.is_empty()
    }
}

/// Optional `?year=&month=&day=` selection. Missing, `""` and `"any"` leave a dimension open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
}

impl FilterSelection {
    pub fn new(year: &str, month: &str, day: &str) -> Self {
        Self {
            year: Some(year.to_string()),
            month: Some(month.to_string()),
            day: Some(day.to_string()),
        }
    }

    pub fn year(&self) -> Option<&str> {
        constraint(self.year.as_deref())
    }

    pub fn month(&self) -> Option<&str> {
        constraint(self.month.as_deref())
    }

    pub fn day(&self) -> Option<&str> {
        constraint(self.day.as_deref())
    }

    /// True when no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.year().is_none() && self.month().is_none() && self.day().is_none()
    }

    /// All constrained dimensions must equal the sample's zero-padded date component.
    pub fn matches(&self, sample: &Sample) -> bool {
        let ts = &sample.timestamp;
        component_matches(self.year(), || ts.format("%Y").to_string())
            && component_matches(self.month(), || ts.format("%m").to_string())
            && component_matches(self.day(), || ts.format("%d").to_string())
    }
}

fn constraint(value: Option<&str>) -> Option<&str> {
    match value {
        None | Some("") | Some(ANY) => None,
        Some(v) => Some(v),
    }
}

fn component_matches(selector: Option<&str>, component: impl FnOnce() -> String) -> bool {
    match selector {
        None => true,
        Some(want) => component() == want,
    }
}

/// Samples matching `selection`, most recent first.
pub fn apply_filter(samples: &[Sample], selection: &FilterSelection) -> Vec<Sample> {
    let mut out: Vec<Sample> = samples
        .iter()
        .filter(|s| selection.matches(s))
        .cloned()
        .collect();
    out.reverse();
    out
}
