use std::path::PathBuf;

use binomix_stats::report::ObservationReport;
use clap::Args;
use log::info;

use crate::{model::saved_model::SavedModel, util, util::Output, view};

#[derive(Debug, Clone, Args)]
pub(crate) struct EstimateArg {
    /// Path to the observations file (one 0/1 value per line)
    pub data: PathBuf,

    /// Also print the probability mass function of the estimated distribution
    #[arg(long)]
    pub show_pmf: bool,

    /// Save the estimated distribution as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EstimateArg) -> anyhow::Result<()> {
    let observations = util::read_observations_file(&arg.data)?;
    info!(
        "Read {} observations from {}",
        observations.len(),
        arg.data.display()
    );

    let report = ObservationReport::new(observations)?;
    let model = &report.model;

    println!("Estimated distribution ({})", arg.data.display());
    println!("==========================================\n");
    println!("{model}");
    println!();
    print!("{}", view::render_model(model)?);
    println!();

    println!("Observations");
    print!("{}", view::render_descriptive(&report.stats)?);
    println!();

    println!("Histogram of observations");
    print!("{}", view::render_histogram(&report.histogram)?);

    if arg.show_pmf {
        println!();
        println!("Probability mass function");
        print!("{}", view::render_pmf_curve(model, 0.0)?);
    }

    if let Some(path) = &arg.output {
        let mut output = Output::open(path.clone())?;
        output.write_json(SavedModel::from_model(model))?;
        info!("Distribution saved to {}", output.display_path());
    }

    Ok(())
}
