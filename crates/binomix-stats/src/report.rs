use crate::{
    binomial::BinomialModel, descriptive::DescriptiveStats, error::BinomialError,
    histogram::Histogram,
};

/// Everything derived from one sequence of binomial observations.
///
/// Combines:
/// - the [`BinomialModel`] estimated from the observations
/// - the empirical [`DescriptiveStats`] of the same data
/// - the [`Histogram`] of observed values
///
/// # Examples
///
/// ```
/// use binomix_stats::report::ObservationReport;
///
/// let report = ObservationReport::new([1.0, 0.0, 1.0, 1.0, 0.0]).unwrap();
/// assert_eq!(report.model.trials(), 5);
/// assert_eq!(report.histogram.successes(), 3);
/// assert!((report.stats.mean - report.model.probability()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationReport {
    /// Binomial parameters estimated from the observations.
    pub model: BinomialModel,
    /// Empirical statistics of the observations.
    pub stats: DescriptiveStats,
    /// Frequency of each observed value.
    pub histogram: Histogram,
}

impl ObservationReport {
    /// Builds the report for `observations`.
    ///
    /// # Errors
    ///
    /// Fails like [`BinomialModel::estimate_from_observations`]: with
    /// [`BinomialError::EmptyInput`] for no observations and with
    /// [`BinomialError::InvalidParameter`] for data that is not 0/1 valued.
    pub fn new<I>(observations: I) -> Result<Self, BinomialError>
    where
        I: IntoIterator<Item = f64>,
    {
        let observations = observations.into_iter().collect::<Vec<_>>();
        let model = BinomialModel::from_observations(observations.iter().copied())?;

        let mut sorted = observations.clone();
        sorted.sort_by(f64::total_cmp);
        let histogram = Histogram::from_sorted(&sorted);
        let stats = DescriptiveStats::new(observations).ok_or(BinomialError::EmptyInput)?;

        Ok(Self {
            model,
            stats,
            histogram,
        })
    }
}
