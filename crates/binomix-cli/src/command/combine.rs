use std::path::PathBuf;

use clap::Args;
use log::{debug, info};

use crate::{model::saved_model::SavedModel, util, util::Output, view};

#[derive(Debug, Clone, Args)]
pub(crate) struct CombineArg {
    /// Path to the first distribution JSON file
    pub left: PathBuf,

    /// Path to the second distribution JSON file
    pub right: PathBuf,

    /// Save the combined distribution as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CombineArg) -> anyhow::Result<()> {
    let left = util::read_model_file(&arg.left)?.to_model()?;
    let right = util::read_model_file(&arg.right)?.to_model()?;
    debug!("Left: {left}");
    debug!("Right: {right}");

    let combined = left.combine(&right)?;

    println!("{combined}");
    println!();
    print!("{}", view::render_model(&combined)?);

    if let Some(path) = &arg.output {
        let mut output = Output::open(path.clone())?;
        output.write_json(SavedModel::from_model(&combined))?;
        info!("Combined distribution saved to {}", output.display_path());
    }

    Ok(())
}
