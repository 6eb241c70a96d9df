use bitgram::{GrammarTable, Pipeline};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Compress a bilevel image with a layered substitution grammar and
/// run-length coding, reconstruct it, and report compression and loss.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Input image path
    input: PathBuf,

    /// Output path for the reconstructed image
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let table = GrammarTable::layered();
    let pipeline = Pipeline::new(&table);

    match pipeline.run(&cli.input, &cli.output) {
        Ok(report) => {
            println!("compression ratio: {:.2}%", report.compression_ratio());
            println!("loss: {:.2}%", report.loss_pct);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
