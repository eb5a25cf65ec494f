use std::path::PathBuf;

use cbaplan::export::export;
use cbaplan::{AnalysisSettings, App, Report, init_logging};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cbaplan")]
#[command(about = "Cost-benefit appraisal of the two capital projects")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// YAML file with analysis settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the data directory holding the log (default: ~/.cbaplan/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    /// Number of Monte Carlo samples
    #[arg(long, global = true)]
    samples: Option<usize>,

    /// Monte Carlo seed
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full text report (default)
    Report,
    /// Write every chart series as JSON
    Export {
        /// Output directory
        #[arg(short, long, default_value = "output")]
        out: PathBuf,
    },
    /// Browse the charts in the terminal
    View,
    /// Print the effective settings as YAML
    Config,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cbaplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let settings =
        AnalysisSettings::load(args.config.as_deref())?.with_overrides(args.samples, args.seed);

    match args.command.unwrap_or(Command::Report) {
        Command::Config => print!("{}", settings.to_yaml()?),
        Command::Report => {
            let report = Report::compute(&settings)?;
            print!("{report}");
        }
        Command::Export { out } => {
            let report = Report::compute(&settings)?;
            let paths = export(&report, &out)?;
            println!("Wrote {} files to {}", paths.len(), out.display());
        }
        Command::View => {
            let report = Report::compute(&settings)?;
            let mut app = App::new(report);
            ratatui::run(|terminal| app.run(terminal))?;

            if let Err(err) = ratatui::try_restore() {
                tracing::error!("Failed to restore terminal: {err}");
            }
        }
    }

    tracing::info!("cbaplan finished");
    Ok(())
}
