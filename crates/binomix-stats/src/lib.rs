//! Binomial distribution statistics for the binomix project.
//!
//! This crate provides:
//!
//! - **Binomial model**: mean, standard deviation and probability mass function of a
//!   binomial distribution, parameter estimation from 0/1 observations, and combination
//!   of two distributions sharing a success probability
//! - **Descriptive statistics**: empirical mean, median, variance of observations
//! - **Histogram generation**: frequency of each observed value
//! - **Observation reports**: model, descriptive statistics and histogram in one pass
//!
//! # Modules
//!
//! - [`binomial`]: The binomial model and its PMF curve
//! - [`distribution`]: The [`Distribution`](distribution::Distribution) capability
//!   shared by the model and the descriptive statistics
//! - [`descriptive`]: Descriptive statistics for summarizing observations
//! - [`histogram`]: Histogram construction for visualizing observations
//! - [`report`]: Combined analysis of one observation sequence
//! - [`error`]: Error types
//!
//! # Examples
//!
//! ## Evaluating a binomial distribution
//!
//! ```
//! use binomix_stats::{binomial::BinomialModel, distribution::Distribution};
//!
//! let model = BinomialModel::new(0.4, 5).unwrap();
//! assert!((model.mean() - 2.0).abs() < 1e-12);
//! assert!((model.pmf(2).unwrap() - 0.3456).abs() < 1e-12);
//! assert_eq!(model.to_string(), format!("mean {}, standard deviation {}, p 0.4, n 5", model.mean(), model.stdev()));
//! ```
//!
//! ## Estimating from observations
//!
//! ```
//! use binomix_stats::binomial::BinomialModel;
//!
//! let mut model = BinomialModel::default();
//! let (p, n) = model.estimate_from_observations([1.0, 0.0, 1.0, 1.0, 0.0]).unwrap();
//! assert!((p - 0.6).abs() < 1e-12);
//! assert_eq!(n, 5);
//! ```
//!
//! ## Combining distributions
//!
//! ```
//! use binomix_stats::{binomial::BinomialModel, error::BinomialError};
//!
//! let a = BinomialModel::new(0.5, 10).unwrap();
//! let b = BinomialModel::new(0.5, 30).unwrap();
//! assert_eq!(a.combine(&b).unwrap().trials(), 40);
//!
//! let c = BinomialModel::new(0.2, 30).unwrap();
//! assert!(matches!(a.combine(&c), Err(BinomialError::IncompatibleCombination { .. })));
//! ```

pub mod binomial;
pub mod descriptive;
pub mod distribution;
pub mod error;
pub mod histogram;
pub mod report;
