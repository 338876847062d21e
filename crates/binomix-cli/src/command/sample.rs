use std::{io::Write as _, path::PathBuf};

use anyhow::Context;
use clap::Args;
use log::info;
use rand::{Rng, SeedableRng as _};
use rand_distr::Bernoulli;
use rand_pcg::Pcg32;

use crate::{command::ModelArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct SampleArg {
    /// Success probability of each draw and number of draws
    #[clap(flatten)]
    pub model: ModelArg,

    /// Seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the observations to this path instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SampleArg) -> anyhow::Result<()> {
    let model = arg.model.to_model()?;
    let observations = match arg.seed {
        Some(seed) => draw_observations(&mut Pcg32::seed_from_u64(seed), &arg.model)?,
        None => draw_observations(&mut rand::rng(), &arg.model)?,
    };

    let mut output = Output::from_output_path(arg.output.clone())?;
    for value in &observations {
        writeln!(output, "{value}")
            .with_context(|| format!("Failed to write observation to {}", output.display_path()))?;
    }
    output
        .flush()
        .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;

    let successes = observations.iter().filter(|v| **v > 0.0).count();
    info!(
        "Drew {} observations ({successes} successes) from {model} to {}",
        observations.len(),
        output.display_path()
    );

    Ok(())
}

/// Draws `trials` Bernoulli observations (1 for success, 0 for failure).
fn draw_observations<R>(rng: &mut R, arg: &ModelArg) -> anyhow::Result<Vec<f64>>
where
    R: Rng,
{
    let bernoulli = Bernoulli::new(arg.probability)
        .with_context(|| format!("Invalid success probability: {}", arg.probability))?;
    let observations = (0..arg.trials)
        .map(|_| if rng.sample(bernoulli) { 1.0 } else { 0.0 })
        .collect();
    Ok(observations)
}
