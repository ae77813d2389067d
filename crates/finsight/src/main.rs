use std::path::PathBuf;

use clap::Parser;
use finsight_core::evaluate;
use jiff::civil::Date;

mod data;
mod logging;
mod report;

use data::SnapshotFile;

#[derive(Parser, Debug)]
#[command(name = "finsight")]
#[command(about = "Financial health, debt payoff, and savings advice from a snapshot of records")]
struct Args {
    /// Path to the snapshot document (.yaml, .yml, or .json)
    snapshot: PathBuf,

    /// Extra monthly budget applied to the top-ranked debt
    #[arg(short, long, default_value_t = 0.0)]
    extra_payment: f64,

    /// Report date as YYYY-MM-DD (default: the current date)
    #[arg(short, long)]
    today: Option<Date>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    let file = SnapshotFile::load(&args.snapshot)?;
    let today = args.today.unwrap_or_else(|| jiff::Zoned::now().date());

    tracing::info!(
        snapshot = %args.snapshot.display(),
        %today,
        extra_payment = args.extra_payment,
        "Computing advice report"
    );

    let advice = evaluate(&file.snapshot, &file.preferences, today, args.extra_payment);
    print!("{}", report::render(&advice, &file.preferences, today));

    Ok(())
}
