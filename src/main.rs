use clap::{Parser, Subcommand};
use sheetcast::cli;
use sheetcast::error::CastResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetcast")]
#[command(about = "Config-driven Excel to CSV converter")]
#[command(long_about = "Sheetcast - Config-driven Excel to CSV conversion

A configuration workbook describes, per sheet: which rows to export
(ranges like '2-4,7', single rows, or cell references like 'A12'),
whether to strip #-prefixed comment rows or the Comment column, whether
to transpose, and where the CSV lands.

COMMANDS:
  convert - Run every configured sheet to CSV
  check   - Validate a configuration workbook without writing
  sheets  - List a workbook's sheets and dimensions

EXAMPLES:
  sheetcast convert config.xlsx data.xlsx -o exports
  sheetcast check config.xlsx --workbook data.xlsx
  sheetcast sheets data.xlsx

NOTE: numeric cells export integer-truncated ('3.9' becomes '3').")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every configured sheet to CSV
    Convert {
        /// Configuration workbook (.xlsx)
        config: PathBuf,

        /// Data workbook (.xlsx)
        workbook: PathBuf,

        /// Base output directory for generated CSV files
        #[arg(short, long, default_value = "output", env = "SHEETCAST_OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Show per-sheet extraction detail
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a configuration workbook without writing anything
    Check {
        /// Configuration workbook (.xlsx)
        config: PathBuf,

        /// Also verify configured sheets exist in this data workbook
        #[arg(short, long)]
        workbook: Option<PathBuf>,
    },

    /// List a workbook's sheets and their dimensions
    Sheets {
        /// Workbook to inspect (.xlsx)
        workbook: PathBuf,
    },
}

fn main() -> CastResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            config,
            workbook,
            output_dir,
            verbose,
        } => cli::convert(config, workbook, output_dir, verbose),

        Commands::Check { config, workbook } => cli::check(config, workbook),

        Commands::Sheets { workbook } => cli::sheets(workbook),
    }
}
