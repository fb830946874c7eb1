// Presentation assembly: averages + filtered results + filter choices -> one view model.

use crate::aggregation::compute_averages;
use crate::filter::{FilterOptions, FilterSelection, apply_filter};
use crate::models::{Average, Sample};

/// Everything the dashboard page renders. Averages and results are most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub daily: Vec<Average>,
    pub monthly: Vec<Average>,
    pub yearly: Vec<Average>,
    pub results: Vec<Sample>,
    pub filter_options: FilterOptions,
    /// Selection echoed back so the filter form can keep it selected.
    pub selection: FilterSelection,
    /// Total samples parsed, before filtering.
    pub total_samples: usize,
}

impl DashboardView {
    /// View model with no data; rendered as the "no data" state.
    pub fn empty(selection: FilterSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn has_data(&self) -> bool {
        self.total_samples > 0
    }
}

/// Builds the view model from every parsed sample and the requested selection.
/// The selection narrows `results` only; averages and filter options cover all samples.
pub fn assemble(samples: &[Sample], selection: FilterSelection) -> DashboardView {
    if samples.is_empty() {
        return DashboardView::empty(selection);
    }

    let mut averages = compute_averages(samples);
    averages.daily.reverse();
    averages.monthly.reverse();
    averages.yearly.reverse();

    DashboardView {
        daily: averages.daily,
        monthly: averages.monthly,
        yearly: averages.yearly,
        results: apply_filter(samples, &selection),
        filter_options: FilterOptions::from_samples(samples),
        selection,
        total_samples: samples.len(),
    }
}
