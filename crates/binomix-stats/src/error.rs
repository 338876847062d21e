/// Errors returned by [`BinomialModel`](crate::binomial::BinomialModel) operations.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum BinomialError {
    /// A parameter or evaluation point lies outside its valid domain.
    #[display("invalid parameter: {_0}")]
    InvalidParameter(#[error(source)] InvalidParameter),
    /// Parameters were estimated from an empty observation sequence.
    #[display("cannot estimate parameters from an empty observation sequence")]
    EmptyInput,
    /// Two models with different success probabilities were combined.
    #[display("cannot combine distributions with different probabilities ({left} and {right})")]
    IncompatibleCombination { left: f64, right: f64 },
}

/// The specific parameter that failed validation.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidParameter {
    #[display("probability {probability} is not in [0, 1]")]
    Probability { probability: f64 },
    #[display("outcome {k} is outside the support [0, {trials}]")]
    Outcome { k: u64, trials: u64 },
    #[display("trial count {left} + {right} overflows")]
    TrialsOverflow { left: u64, right: u64 },
}

impl From<InvalidParameter> for BinomialError {
    fn from(value: InvalidParameter) -> Self {
        Self::InvalidParameter(value)
    }
}
