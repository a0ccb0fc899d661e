use clap::{CommandFactory, Parser};
use powercap_average::{run, Config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status for usage, parse, empty-input and I/O failures.
const FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "powercap-average")]
#[command(version, about = "Average per-run powercap measurements into one summary line")]
struct Args {
    /// Input file: one record per line, five tab-separated `label: value` fields.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the `Net_*` summary line (created or overwritten).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("powercap_average=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Usage errors are reported on stdout, not stderr.
    let config = match Config::new(args.input, args.output) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            println!("{}", Args::command().render_usage());
            return ExitCode::from(FAILURE);
        }
    };

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(FAILURE)
        }
    }
}
