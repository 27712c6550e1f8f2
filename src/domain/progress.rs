use super::models::ApplicationData;

/// How much of the form has been filled in.
///
/// The counts are kept exact; rounding only happens in [`Progress::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub filled: usize,
    pub total: usize,
}

impl Progress {
    /// Exact completion percentage in `0.0..=100.0`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.filled as f64 / self.total as f64
    }

    /// Percentage rounded for display.
    pub fn rounded(&self) -> u16 {
        self.percent().round() as u16
    }

    /// Completion as a `0.0..=1.0` ratio, the form a gauge widget expects.
    pub fn ratio(&self) -> f64 {
        self.percent() / 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.total
    }
}

/// Counts fields whose trimmed value is non-empty.
pub fn compute_progress(data: &ApplicationData) -> Progress {
    let mut total = 0;
    let mut filled = 0;
    for (_, value) in data.iter() {
        total += 1;
        if !value.trim().is_empty() {
            filled += 1;
        }
    }
    Progress { filled, total }
}
