use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::{command::ModelArg, model::saved_model::SavedModel, util::Output, view};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub model: ModelArg,

    /// Save the distribution as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let model = arg.model.to_model()?;

    println!("{model}");
    println!();
    print!("{}", view::render_model(&model)?);

    if let Some(path) = &arg.output {
        let mut output = Output::open(path.clone())?;
        output.write_json(SavedModel::from_model(&model))?;
        info!("Distribution saved to {}", output.display_path());
    }

    Ok(())
}
