/// Frequency of each distinct value in a sequence of observations.
///
/// Binomial observations take few distinct values (0 and 1 for Bernoulli
/// samples), so every distinct value gets its own bin instead of grouping
/// values into ranges. Bins are ordered by [`f64::total_cmp`].
///
/// # Examples
///
/// ```
/// use binomix_stats::histogram::Histogram;
///
/// let histogram = Histogram::new([1.0, 0.0, 1.0, 1.0, 0.0]);
/// assert_eq!(histogram.failures(), 2);
/// assert_eq!(histogram.successes(), 3);
/// assert_eq!(histogram.total(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    /// One bin per distinct observed value, in ascending value order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a [`Histogram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// The observed value.
    pub value: f64,
    /// Number of observations equal to `value`.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let mut bins = Vec::<HistogramBin>::new();
        for &value in sorted_values {
            match bins.last_mut() {
                Some(bin) if bin.value.total_cmp(&value).is_eq() => bin.count += 1,
                _ => bins.push(HistogramBin { value, count: 1 }),
            }
        }
        Self { bins }
    }

    /// Count of observations equal to `value`.
    #[must_use]
    pub fn count_of(&self, value: f64) -> u64 {
        self.bins
            .iter()
            .find(|bin| bin.value.total_cmp(&value).is_eq())
            .map_or(0, |bin| bin.count)
    }

    /// Count of observations equal to 1.
    #[must_use]
    pub fn successes(&self) -> u64 {
        self.count_of(1.0)
    }

    /// Count of observations equal to 0.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.count_of(0.0)
    }

    /// Total number of observations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// The largest bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
