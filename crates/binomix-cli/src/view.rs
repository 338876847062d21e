//! Plain-text rendering of distributions and observations
//!
//! Every function returns the rendered lines as a `String` so commands decide
//! where they go.

use std::fmt::{self, Write as _};

use binomix_stats::{
    binomial::BinomialModel, descriptive::DescriptiveStats, distribution::Distribution as _,
    histogram::Histogram,
};

/// Width of the longest bar, in characters
const BAR_WIDTH: usize = 40;

/// Render the parameters and moments of a distribution as a two-column table
pub fn render_model(model: &BinomialModel) -> Result<String, fmt::Error> {
    let rows = [
        ("Probability (p)", format!("{:.6}", model.probability())),
        ("Trials (n)", model.trials().to_string()),
        ("Mean", format!("{:.6}", model.mean())),
        ("Std deviation", format!("{:.6}", model.stdev())),
        ("Variance", format!("{:.6}", model.variance())),
    ];
    render_rows(&rows)
}

/// Render empirical statistics of observations as a two-column table
pub fn render_descriptive(stats: &DescriptiveStats) -> Result<String, fmt::Error> {
    let rows = [
        ("Count", stats.count().to_string()),
        ("Min", format!("{:.6}", stats.min)),
        ("Max", format!("{:.6}", stats.max)),
        ("Mean", format!("{:.6}", stats.mean)),
        ("Median", format!("{:.6}", stats.median)),
        ("Std deviation", format!("{:.6}", stats.std_dev)),
    ];
    render_rows(&rows)
}

fn render_rows(rows: &[(&str, String)]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (label, value) in rows {
        writeln!(out, "  {label:<16} {value:>14}")?;
    }
    Ok(out)
}

/// Render the histogram of observed values as horizontal bars
#[expect(clippy::cast_precision_loss)]
pub fn render_histogram(histogram: &Histogram) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "  {:>10} {:>8} {:>7}", "Value", "Count", "Share")?;
    writeln!(out, "  {}", "-".repeat(27 + 1 + BAR_WIDTH))?;

    let total = histogram.total();
    let max = histogram.max_count() as f64;
    for bin in &histogram.bins {
        let share = if total == 0 {
            0.0
        } else {
            bin.count as f64 / total as f64 * 100.0
        };
        writeln!(
            out,
            "  {:>10} {:>8} {:>6.1}% {}",
            bin.value,
            bin.count,
            share,
            bar(bin.count as f64, max),
        )?;
    }
    Ok(out)
}

/// Render the PMF and CDF of a distribution as a table with bars
///
/// Rows with a probability below `min_mass` are skipped and counted in a
/// trailing note.
pub fn render_pmf_curve(model: &BinomialModel, min_mass: f64) -> Result<String, fmt::Error> {
    let curve = model.pmf_curve().collect::<Vec<_>>();
    let max = curve.iter().map(|(_, mass)| *mass).fold(0.0, f64::max);

    let mut out = String::new();
    writeln!(out, "  {:>8} {:>12} {:>12}", "k", "P(X=k)", "P(X<=k)")?;
    writeln!(out, "  {}", "-".repeat(34 + 1 + BAR_WIDTH))?;

    let mut cumulative = 0.0;
    let mut hidden = 0;
    for (k, mass) in curve {
        cumulative += mass;
        if mass < min_mass {
            hidden += 1;
            continue;
        }
        writeln!(
            out,
            "  {k:>8} {mass:>12.8} {:>12.8} {}",
            cumulative.min(1.0),
            bar(mass, max),
        )?;
    }
    if hidden > 0 {
        writeln!(out, "  ({hidden} rows below {min_mass} hidden)")?;
    }
    Ok(out)
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = (value / max * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}
