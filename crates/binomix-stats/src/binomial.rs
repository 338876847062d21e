use std::{fmt, iter::FusedIterator, ops::RangeInclusive};

use crate::{
    distribution::Distribution,
    error::{BinomialError, InvalidParameter},
};

/// Success probability used by [`BinomialModel::default`].
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Number of trials used by [`BinomialModel::default`].
pub const DEFAULT_TRIALS: u64 = 20;

/// Largest absolute difference at which two success probabilities are
/// considered equal by [`BinomialModel::combine`].
pub const PROBABILITY_TOLERANCE: f64 = 1e-12;

/// A binomial distribution: the number of successes in `trials` independent
/// Bernoulli trials, each succeeding with `probability`.
///
/// The mean and standard deviation are derived from the parameters and
/// recomputed whenever the parameters change.
///
/// # Examples
///
/// ```
/// use binomix_stats::{binomial::BinomialModel, distribution::Distribution};
///
/// let model = BinomialModel::new(0.4, 5).unwrap();
/// assert!((model.mean() - 2.0).abs() < 1e-12);
/// assert!((model.stdev() - 1.2_f64.sqrt()).abs() < 1e-12);
/// assert!((model.pmf(2).unwrap() - 0.3456).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialModel {
    probability: f64,
    trials: u64,
    mean: f64,
    stdev: f64,
    observations: Vec<f64>,
}

impl Default for BinomialModel {
    fn default() -> Self {
        Self::from_valid(DEFAULT_PROBABILITY, DEFAULT_TRIALS)
    }
}

impl BinomialModel {
    /// Creates a model from explicit parameters.
    ///
    /// Fails with [`BinomialError::InvalidParameter`] if `probability` is NaN
    /// or outside `[0, 1]`.
    pub fn new(probability: f64, trials: u64) -> Result<Self, BinomialError> {
        validate_probability(probability)?;
        Ok(Self::from_valid(probability, trials))
    }

    /// Creates a model whose parameters are estimated from `observations`.
    ///
    /// See [`Self::estimate_from_observations`] for the estimation rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use binomix_stats::binomial::BinomialModel;
    ///
    /// let model = BinomialModel::from_observations([1.0, 0.0, 1.0, 1.0, 0.0]).unwrap();
    /// assert!((model.probability() - 0.6).abs() < 1e-12);
    /// assert_eq!(model.trials(), 5);
    /// ```
    pub fn from_observations<I>(observations: I) -> Result<Self, BinomialError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut model = Self::default();
        model.estimate_from_observations(observations)?;
        Ok(model)
    }

    fn from_valid(probability: f64, trials: u64) -> Self {
        let mut this = Self {
            probability,
            trials,
            mean: 0.0,
            stdev: 0.0,
            observations: vec![],
        };
        this.recompute();
        this
    }

    fn recompute(&mut self) {
        self.mean = compute_mean(self.probability, self.trials);
        self.stdev = compute_stdev(self.probability, self.trials);
    }

    /// The per-trial success probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// The number of trials.
    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Replaces the parameters with ones estimated from `observations`.
    ///
    /// The observations are expected to be 0/1 valued. `trials` becomes the
    /// number of observations and `probability` their arithmetic mean. The
    /// observations are kept and exposed through
    /// [`Distribution::observations`].
    ///
    /// Returns the new `(probability, trials)` pair.
    ///
    /// # Errors
    ///
    /// * [`BinomialError::EmptyInput`] if `observations` is empty.
    /// * [`BinomialError::InvalidParameter`] if the estimated probability is
    ///   not in `[0, 1]`, which happens when the data is not 0/1 valued.
    ///
    /// The model is left unchanged on error.
    #[expect(clippy::cast_precision_loss)]
    pub fn estimate_from_observations<I>(
        &mut self,
        observations: I,
    ) -> Result<(f64, u64), BinomialError>
    where
        I: IntoIterator<Item = f64>,
    {
        let observations = observations.into_iter().collect::<Vec<_>>();
        if observations.is_empty() {
            return Err(BinomialError::EmptyInput);
        }

        let trials = observations.len() as u64;
        let probability = observations.iter().sum::<f64>() / observations.len() as f64;
        validate_probability(probability)?;

        self.probability = probability;
        self.trials = trials;
        self.observations = observations;
        self.recompute();

        Ok((probability, trials))
    }

    /// Probability of observing exactly `k` successes.
    ///
    /// # Errors
    ///
    /// Returns [`BinomialError::InvalidParameter`] if `k > trials`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binomix_stats::binomial::BinomialModel;
    ///
    /// let model = BinomialModel::new(0.5, 0).unwrap();
    /// assert_eq!(model.pmf(0).unwrap(), 1.0);
    /// assert!(model.pmf(1).is_err());
    /// ```
    pub fn pmf(&self, k: u64) -> Result<f64, BinomialError> {
        if k > self.trials {
            return Err(InvalidParameter::Outcome {
                k,
                trials: self.trials,
            }
            .into());
        }
        Ok(mass(self.probability, self.trials, k))
    }

    /// Probability of observing at most `k` successes.
    ///
    /// Values of `k` at or beyond `trials` cover the whole support and yield 1.
    #[must_use]
    pub fn cdf(&self, k: u64) -> f64 {
        if k >= self.trials {
            return 1.0;
        }
        (0..=k)
            .map(|i| mass(self.probability, self.trials, i))
            .sum::<f64>()
            .min(1.0)
    }

    /// Returns the `(k, pmf(k))` pairs over the support `0..=trials`.
    ///
    /// The curve is computed lazily; call this again (or clone the iterator)
    /// to walk it a second time.
    ///
    /// # Examples
    ///
    /// ```
    /// use binomix_stats::binomial::BinomialModel;
    ///
    /// let model = BinomialModel::new(0.3, 4).unwrap();
    /// let curve = model.pmf_curve().collect::<Vec<_>>();
    /// assert_eq!(curve.len(), 5);
    /// assert_eq!(curve[0].0, 0);
    /// ```
    #[must_use]
    pub fn pmf_curve(&self) -> PmfCurve {
        PmfCurve {
            probability: self.probability,
            trials: self.trials,
            outcomes: 0..=self.trials,
        }
    }

    /// Combines two models with the same success probability into one whose
    /// trial count is the sum of both.
    ///
    /// Probabilities are compared with an absolute tolerance of
    /// [`PROBABILITY_TOLERANCE`]. Observations are not carried over.
    ///
    /// # Errors
    ///
    /// * [`BinomialError::IncompatibleCombination`] if the probabilities differ.
    /// * [`BinomialError::InvalidParameter`] if the summed trial count does not
    ///   fit in a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binomix_stats::binomial::BinomialModel;
    ///
    /// let a = BinomialModel::new(0.4, 20).unwrap();
    /// let b = BinomialModel::new(0.4, 60).unwrap();
    /// assert_eq!(a.combine(&b).unwrap().trials(), 80);
    ///
    /// let c = BinomialModel::new(0.5, 10).unwrap();
    /// assert!(a.combine(&c).is_err());
    /// ```
    pub fn combine(&self, other: &Self) -> Result<Self, BinomialError> {
        if (self.probability - other.probability).abs() > PROBABILITY_TOLERANCE {
            return Err(BinomialError::IncompatibleCombination {
                left: self.probability,
                right: other.probability,
            });
        }
        let trials = self
            .trials
            .checked_add(other.trials)
            .ok_or(InvalidParameter::TrialsOverflow {
                left: self.trials,
                right: other.trials,
            })?;
        Ok(Self::from_valid(self.probability, trials))
    }
}

impl Distribution for BinomialModel {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn stdev(&self) -> f64 {
        self.stdev
    }

    fn observations(&self) -> &[f64] {
        &self.observations
    }
}

impl fmt::Display for BinomialModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {}, standard deviation {}, p {}, n {}",
            self.mean, self.stdev, self.probability, self.trials
        )
    }
}

/// Lazy iterator over `(k, pmf(k))` pairs, returned by
/// [`BinomialModel::pmf_curve`].
#[derive(Debug, Clone)]
pub struct PmfCurve {
    probability: f64,
    trials: u64,
    outcomes: RangeInclusive<u64>,
}

impl Iterator for PmfCurve {
    type Item = (u64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.outcomes.next()?;
        Some((k, mass(self.probability, self.trials, k)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.outcomes.size_hint()
    }
}

impl FusedIterator for PmfCurve {}

/// Mean of a binomial distribution, `probability * trials`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn compute_mean(probability: f64, trials: u64) -> f64 {
    probability * trials as f64
}

/// Standard deviation of a binomial distribution,
/// `sqrt(trials * probability * (1 - probability))`.
///
/// Returns NaN when `probability` is outside `[0, 1]`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn compute_stdev(probability: f64, trials: u64) -> f64 {
    (trials as f64 * probability * (1.0 - probability)).sqrt()
}

/// Natural logarithm of the binomial coefficient `C(n, k)`.
///
/// Accumulates `ln((n - k + i) / i)` for `i` in `1..=min(k, n - k)`, so it
/// stays finite for trial counts whose factorials would overflow.
///
/// # Panics
///
/// Panics if `k > n`.
///
/// # Examples
///
/// ```
/// use binomix_stats::binomial::ln_binomial_coefficient;
///
/// assert!((ln_binomial_coefficient(5, 2).exp() - 10.0).abs() < 1e-9);
/// assert_eq!(ln_binomial_coefficient(7, 0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
    assert!(k <= n, "k must not exceed n");
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - k + i) as f64 / i as f64).ln())
        .sum()
}

fn validate_probability(probability: f64) -> Result<(), InvalidParameter> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(InvalidParameter::Probability { probability })
    }
}

#[expect(clippy::cast_precision_loss)]
fn mass(probability: f64, trials: u64, k: u64) -> f64 {
    debug_assert!(k <= trials);
    // ln(0) is -inf and 0 * -inf is NaN, so the degenerate ends are exact.
    if probability <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if probability >= 1.0 {
        return if k == trials { 1.0 } else { 0.0 };
    }
    let ln_mass = ln_binomial_coefficient(trials, k)
        + k as f64 * probability.ln()
        + (trials - k) as f64 * (-probability).ln_1p();
    ln_mass.exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_parameters() {
        let model = BinomialModel::default();
        assert_close(model.probability(), 0.5);
        assert_eq!(model.trials(), 20);
        assert_close(model.mean(), 10.0);
        assert_close(model.stdev(), 5.0_f64.sqrt());
        assert!(model.observations().is_empty());
    }

    #[test]
    fn test_mean_and_stdev_formulas() {
        for &p in &[0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            for &n in &[0_u64, 1, 7, 100, 10_000] {
                let model = BinomialModel::new(p, n).unwrap();
                #[expect(clippy::cast_precision_loss)]
                let nf = n as f64;
                assert_close(model.mean(), p * nf);
                assert_close(model.stdev(), (nf * p * (1.0 - p)).sqrt());
                assert_close(model.variance(), nf * p * (1.0 - p));
            }
        }
    }

    #[test]
    fn test_reference_scenario() {
        let model = BinomialModel::new(0.4, 5).unwrap();
        assert_close(model.mean(), 2.0);
        assert!((model.stdev() - 1.0954).abs() < 1e-4);
        assert_close(model.pmf(2).unwrap(), 0.3456);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        for p in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let err = BinomialModel::new(p, 10).unwrap_err();
            assert!(
                matches!(
                    err,
                    BinomialError::InvalidParameter(InvalidParameter::Probability { .. })
                ),
                "{p} should be rejected"
            );
        }
    }

    #[test]
    fn test_pmf_normalization() {
        for &p in &[0.0, 0.05, 0.3, 0.5, 0.77, 1.0] {
            for &n in &[0_u64, 1, 2, 10, 50, 1000] {
                let model = BinomialModel::new(p, n).unwrap();
                let total = (0..=n).map(|k| model.pmf(k).unwrap()).sum::<f64>();
                assert!(
                    (total - 1.0).abs() < 1e-9,
                    "sum of PMF for p={p}, n={n} was {total}"
                );
            }
        }
    }

    #[test]
    fn test_pmf_out_of_support() {
        let model = BinomialModel::new(0.5, 0).unwrap();
        assert_close(model.pmf(0).unwrap(), 1.0);
        assert_eq!(
            model.pmf(1),
            Err(BinomialError::InvalidParameter(InvalidParameter::Outcome {
                k: 1,
                trials: 0
            }))
        );

        let model = BinomialModel::new(0.5, 4).unwrap();
        assert!(model.pmf(4).is_ok());
        assert!(model.pmf(5).is_err());
    }

    #[test]
    fn test_pmf_degenerate_probabilities() {
        let never = BinomialModel::new(0.0, 6).unwrap();
        assert_close(never.pmf(0).unwrap(), 1.0);
        assert_close(never.pmf(3).unwrap(), 0.0);

        let always = BinomialModel::new(1.0, 6).unwrap();
        assert_close(always.pmf(6).unwrap(), 1.0);
        assert_close(always.pmf(5).unwrap(), 0.0);
    }

    #[test]
    fn test_pmf_large_trials_stays_finite() {
        let model = BinomialModel::new(0.5, 5000).unwrap();
        let peak = model.pmf(2500).unwrap();
        assert!(peak.is_finite());
        // Normal approximation: 1 / sqrt(2 * pi * n * p * (1 - p))
        let approx = 1.0 / (2.0 * std::f64::consts::PI * 1250.0).sqrt();
        assert!((peak - approx).abs() < 1e-4);
    }

    #[test]
    fn test_ln_binomial_coefficient_matches_pascal() {
        let mut row = vec![1_u64];
        for n in 1..=30_u64 {
            let mut next = vec![1_u64; row.len() + 1];
            for i in 1..row.len() {
                next[i] = row[i - 1] + row[i];
            }
            row = next;
            for (k, &c) in (0_u64..).zip(&row) {
                #[expect(clippy::cast_precision_loss)]
                let expected = c as f64;
                let actual = ln_binomial_coefficient(n, k).exp();
                assert!((actual - expected).abs() / expected < 1e-12, "C({n}, {k})");
            }
        }
    }

    #[test]
    fn test_cdf() {
        let model = BinomialModel::new(0.4, 15).unwrap();
        let mut prev = 0.0;
        for k in 0..=15 {
            let c = model.cdf(k);
            assert!(c >= prev, "CDF not monotone at k={k}");
            prev = c;
        }
        assert_close(model.cdf(15), 1.0);
        assert_close(model.cdf(100), 1.0);
        assert_close(model.cdf(0), 0.6_f64.powi(15));
    }

    #[test]
    fn test_pmf_curve_matches_pmf() {
        let model = BinomialModel::new(0.35, 12).unwrap();
        let curve = model.pmf_curve();
        assert_eq!(curve.size_hint(), (13, Some(13)));

        let pairs = curve.collect::<Vec<_>>();
        assert_eq!(pairs.len(), 13);
        for (k, p) in &pairs {
            assert_close(*p, model.pmf(*k).unwrap());
        }

        // Restartable: a fresh curve yields the same pairs
        let again = model.pmf_curve().collect::<Vec<_>>();
        assert_eq!(pairs, again);
    }

    #[test]
    fn test_pmf_curve_zero_trials() {
        let model = BinomialModel::new(0.5, 0).unwrap();
        let curve = model.pmf_curve().collect::<Vec<_>>();
        assert_eq!(curve, vec![(0, 1.0)]);
    }

    #[test]
    fn test_estimate_from_observations() {
        let mut model = BinomialModel::default();
        let data = [1.0, 0.0, 1.0, 1.0, 0.0];
        let (p, n) = model.estimate_from_observations(data).unwrap();
        assert_close(p, 0.6);
        assert_eq!(n, 5);
        assert_close(model.probability(), 0.6);
        assert_eq!(model.trials(), 5);
        assert_close(model.mean(), 3.0);
        assert_close(model.stdev(), 1.2_f64.sqrt());
        assert_eq!(model.observations(), &data);
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let data = [0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0];
        let mut model = BinomialModel::default();
        let first = model.estimate_from_observations(data).unwrap();
        let snapshot = model.clone();
        let second = model.estimate_from_observations(data).unwrap();
        assert_eq!(first, second);
        assert_eq!(model, snapshot);
    }

    #[test]
    fn test_estimate_empty_input() {
        let mut model = BinomialModel::new(0.3, 8).unwrap();
        let err = model.estimate_from_observations(Vec::<f64>::new()).unwrap_err();
        assert_eq!(err, BinomialError::EmptyInput);
        assert_close(model.probability(), 0.3);
        assert_eq!(model.trials(), 8);
    }

    #[test]
    fn test_estimate_non_binary_data_leaves_model_untouched() {
        let mut model = BinomialModel::new(0.3, 8).unwrap();
        let err = model.estimate_from_observations([2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            BinomialError::InvalidParameter(InvalidParameter::Probability { .. })
        ));
        assert_close(model.probability(), 0.3);
        assert_eq!(model.trials(), 8);
        assert!(model.observations().is_empty());
    }

    #[test]
    fn test_combine_same_probability() {
        let a = BinomialModel::new(0.4, 20).unwrap();
        let b = BinomialModel::new(0.4, 60).unwrap();
        let combined = a.combine(&b).unwrap();
        assert_close(combined.probability(), 0.4);
        assert_eq!(combined.trials(), 80);
        assert_close(combined.mean(), 32.0);
        assert_close(combined.stdev(), (80.0_f64 * 0.4 * 0.6).sqrt());
    }

    #[test]
    fn test_combine_within_tolerance() {
        let a = BinomialModel::new(0.1 + 0.2, 3).unwrap();
        let b = BinomialModel::new(0.3, 4).unwrap();
        assert_eq!(a.combine(&b).unwrap().trials(), 7);
    }

    #[test]
    fn test_combine_different_probability() {
        let a = BinomialModel::new(0.4, 20).unwrap();
        let b = BinomialModel::new(0.5, 20).unwrap();
        assert_eq!(
            a.combine(&b),
            Err(BinomialError::IncompatibleCombination {
                left: 0.4,
                right: 0.5
            })
        );
    }

    #[test]
    fn test_combine_trial_count_overflow() {
        let a = BinomialModel::new(0.5, u64::MAX).unwrap();
        let b = BinomialModel::new(0.5, 1).unwrap();
        assert_eq!(
            a.combine(&b),
            Err(BinomialError::InvalidParameter(InvalidParameter::TrialsOverflow {
                left: u64::MAX,
                right: 1
            }))
        );
        let err = b.combine(&a).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid parameter: trial count 1 + {} overflows", u64::MAX)
        );
    }

    #[test]
    fn test_combine_drops_observations() {
        let a = BinomialModel::from_observations([1.0, 0.0]).unwrap();
        let b = BinomialModel::new(0.5, 3).unwrap();
        let combined = a.combine(&b).unwrap();
        assert_eq!(combined.trials(), 5);
        assert!(combined.observations().is_empty());
    }

    #[test]
    fn test_display() {
        let model = BinomialModel::new(0.5, 4).unwrap();
        assert_eq!(model.to_string(), "mean 2, standard deviation 1, p 0.5, n 4");
    }
}
