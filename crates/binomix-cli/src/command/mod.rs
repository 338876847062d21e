use binomix_stats::binomial::{BinomialModel, DEFAULT_PROBABILITY, DEFAULT_TRIALS};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;

use self::{
    combine::CombineArg, estimate::EstimateArg, pmf::PmfArg, sample::SampleArg,
    summary::SummaryArg,
};

mod combine;
mod estimate;
mod pmf;
mod sample;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// How much progress information to print on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Normal)]
    verbosity: LogLevel,

    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Silent,
    Normal,
    Verbose,
}

impl LogLevel {
    fn default_filter(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Normal => "info",
            LogLevel::Verbose => "debug",
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print mean, standard deviation and parameters of a binomial distribution
    Summary(#[clap(flatten)] SummaryArg),
    /// Print the probability mass function of a binomial distribution
    Pmf(#[clap(flatten)] PmfArg),
    /// Estimate a binomial distribution from a file of 0/1 observations
    Estimate(#[clap(flatten)] EstimateArg),
    /// Combine two saved distributions with the same success probability
    Combine(#[clap(flatten)] CombineArg),
    /// Draw Bernoulli observations, one per line
    Sample(#[clap(flatten)] SampleArg),
}

/// Parameters of a binomial distribution given on the command line
#[derive(Debug, Clone, Args)]
pub(crate) struct ModelArg {
    /// Per-trial success probability, in [0, 1]
    #[arg(long, short, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: f64,

    /// Number of trials
    #[arg(long, short = 'n', default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,
}

impl ModelArg {
    pub(crate) fn to_model(&self) -> anyhow::Result<BinomialModel> {
        Ok(BinomialModel::new(self.probability, self.trials)?)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.verbosity.default_filter()))
        .init();

    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Pmf(arg) => pmf::run(&arg)?,
        Mode::Estimate(arg) => estimate::run(&arg)?,
        Mode::Combine(arg) => combine::run(&arg)?,
        Mode::Sample(arg) => sample::run(&arg)?,
    }
    Ok(())
}
