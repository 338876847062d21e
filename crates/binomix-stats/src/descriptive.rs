use crate::distribution::Distribution;

/// Descriptive statistics summarizing a sequence of observations.
///
/// Unlike [`BinomialModel`](crate::binomial::BinomialModel), these values are
/// computed directly from the data without assuming any parametric family.
/// Variance and standard deviation are population (not sample) estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The minimum observed value.
    pub min: f64,
    /// The maximum observed value.
    pub max: f64,
    /// The arithmetic mean of the observations.
    pub mean: f64,
    /// The median of the observations (upper median for even counts).
    pub median: f64,
    /// The population variance of the observations.
    pub variance: f64,
    /// The population standard deviation of the observations.
    pub std_dev: f64,
    observations: Vec<f64>,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from observations in their original order.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if there is at least one observation
    /// * `None` - if there are no observations
    ///
    /// # Examples
    ///
    /// ```
    /// # use binomix_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([1.0, 0.0, 1.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(stats.min, 0.0);
    /// assert_eq!(stats.max, 1.0);
    /// assert_eq!(stats.median, 1.0);
    /// assert!((stats.mean - 0.6).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new<I>(observations: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let observations = observations.into_iter().collect::<Vec<_>>();
        let mut sorted = observations.clone();
        sorted.sort_by(f64::total_cmp);
        let mut stats = Self::from_sorted(&sorted)?;
        stats.observations = observations;
        Some(stats)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// The sorted values become the stored observations. NaN values are
    /// accepted (and propagate into the moments) when ordered as by
    /// [`f64::total_cmp`].
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let n = sorted_values.len() as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = sorted_values[sorted_values.len() / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
            observations: sorted_values.to_vec(),
        })
    }

    /// Number of observations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observations.len()
    }
}

impl Distribution for DescriptiveStats {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn stdev(&self) -> f64 {
        self.std_dev
    }

    fn observations(&self) -> &[f64] {
        &self.observations
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
