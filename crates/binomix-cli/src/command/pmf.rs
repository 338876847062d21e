use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::Context;
use binomix_stats::binomial::BinomialModel;
use clap::Args;
use log::{debug, info};

use crate::{command::ModelArg, view};

#[derive(Debug, Clone, Args)]
pub(crate) struct PmfArg {
    #[clap(flatten)]
    pub model: ModelArg,

    /// Evaluate only P(X = k) for this number of successes
    #[arg(long, short)]
    pub k: Option<u64>,

    /// Hide rows whose probability is below this value
    #[arg(long, default_value_t = 0.0)]
    pub min_mass: f64,

    /// Write the full `k,pmf` curve as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub(crate) fn run(arg: &PmfArg) -> anyhow::Result<()> {
    let model = arg.model.to_model()?;
    debug!("Evaluating PMF of {model}");

    if let Some(k) = arg.k {
        let mass = model.pmf(k)?;
        println!("P(X = {k}) = {mass}");
    } else {
        println!(
            "Probability mass function (p = {}, n = {})",
            model.probability(),
            model.trials()
        );
        print!("{}", view::render_pmf_curve(&model, arg.min_mass)?);
    }

    if let Some(path) = &arg.csv {
        fs::write(path, pmf_csv(&model)?)
            .with_context(|| format!("Failed to write PMF CSV file: {}", path.display()))?;
        info!("PMF curve saved to {}", path.display());
    }

    Ok(())
}

fn pmf_csv(model: &BinomialModel) -> anyhow::Result<String> {
    let mut csv = String::from("k,pmf\n");
    for (k, mass) in model.pmf_curve() {
        writeln!(&mut csv, "{k},{mass}")?;
    }
    Ok(csv)
}
