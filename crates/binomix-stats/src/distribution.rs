/// Summary capability shared by the distribution types of this crate.
///
/// Implementors expose their first two moments and the observations they
/// were built from (empty when the distribution is purely parametric).
///
/// # Examples
///
/// ```
/// use binomix_stats::{binomial::BinomialModel, distribution::Distribution};
///
/// fn describe<D: Distribution>(dist: &D) -> String {
///     format!("{:.2} ± {:.2} ({} obs)", dist.mean(), dist.stdev(), dist.observations().len())
/// }
///
/// let model = BinomialModel::new(0.5, 20).unwrap();
/// assert_eq!(describe(&model), "10.00 ± 2.24 (0 obs)");
/// ```
pub trait Distribution {
    /// The mean of the distribution.
    fn mean(&self) -> f64;

    /// The standard deviation of the distribution.
    fn stdev(&self) -> f64;

    /// The observations backing this distribution, in their original order.
    fn observations(&self) -> &[f64];

    /// The variance, derived from [`Self::stdev`].
    fn variance(&self) -> f64 {
        self.stdev().powi(2)
    }
}
