use crate::config;
use crate::error::{CastError, CastResult};
use crate::excel::WorkbookReader;
use crate::range::RangeSpec;
use crate::types::SheetConfig;
use crate::{extract, transform, writer};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the convert command: run every configuration to completion, then
/// fail with a summary error if any sheet could not be converted.
pub fn convert(
    config_path: PathBuf,
    workbook_path: PathBuf,
    output_dir: PathBuf,
    verbose: bool,
) -> CastResult<()> {
    println!("{}", "📊 Sheetcast - Converting sheets to CSV".bold().green());
    println!("   Config:   {}", config_path.display());
    println!("   Workbook: {}", workbook_path.display());
    println!("   Output:   {}", output_dir.display());
    println!();

    let configs = config::load_sheet_configs(&config_path)?;
    if configs.is_empty() {
        println!("{}", "No sheet configurations found - nothing to do".yellow());
        return Ok(());
    }
    if verbose {
        println!("{}", format!("📖 {} sheet configurations", configs.len()).cyan());
    }

    let mut reader = WorkbookReader::open(&workbook_path)?;

    let total = configs.len();
    let mut failed = 0usize;

    for cfg in &configs {
        match convert_sheet(&mut reader, cfg, &output_dir, verbose) {
            Ok(path) => {
                println!("   ✅ {} → {}", cfg.sheet_name.cyan(), path.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!(
                    "   ❌ {} {}: {}",
                    "Error processing sheet".red(),
                    cfg.sheet_name.red().bold(),
                    e
                );
            }
        }
    }

    println!();
    if failed > 0 {
        return Err(CastError::PartialFailure { failed, total });
    }

    println!("{}", "✅ Conversion completed successfully".bold().green());
    Ok(())
}

/// Extract, transform and write one configured sheet. Failures here are
/// contained by the caller so remaining configurations still run.
fn convert_sheet(
    reader: &mut WorkbookReader,
    cfg: &SheetConfig,
    output_dir: &Path,
    verbose: bool,
) -> CastResult<PathBuf> {
    let grid = reader.sheet_grid(&cfg.sheet_name)?;

    let (matrix, warnings) = extract::extract_matrix(&grid, cfg);
    for warning in &warnings {
        eprintln!("   ⚠️  {}: {}", cfg.sheet_name.yellow(), warning.yellow());
    }
    if verbose {
        println!(
            "{}",
            format!(
                "   {} rows extracted from {} (transpose: {})",
                matrix.len(),
                cfg.sheet_name,
                cfg.should_transpose()
            )
            .cyan()
        );
    }

    let matrix = transform::apply(matrix, cfg.should_transpose());

    let path = output_dir
        .join(&cfg.output_directory)
        .join(&cfg.csv_name);
    writer::write_csv(&path, &matrix)?;

    Ok(path)
}

/// Execute the check command: validate a configuration workbook without
/// writing anything. With `--workbook`, also verify the configured sheets
/// exist.
pub fn check(config_path: PathBuf, workbook_path: Option<PathBuf>) -> CastResult<()> {
    println!("{}", "🔍 Sheetcast - Checking configuration".bold().green());
    println!("   Config: {}\n", config_path.display());

    let configs = config::load_sheet_configs(&config_path)?;
    println!("   {} configuration rows", configs.len());

    let sheet_names = match &workbook_path {
        Some(path) => Some(WorkbookReader::open(path)?.sheet_names()),
        None => None,
    };

    let mut findings = 0usize;
    for (index, cfg) in configs.iter().enumerate() {
        // 1-based workbook row, accounting for the header row.
        let row = index + 2;

        if cfg.sheet_name.is_empty() {
            findings += 1;
            println!("   ⚠️  {}", format!("row {row}: missing sheet name").yellow());
        }
        if cfg.csv_name.is_empty() {
            findings += 1;
            println!("   ⚠️  {}", format!("row {row}: missing CSV name").yellow());
        }

        let spec = RangeSpec::parse(&cfg.range);
        for token in spec.invalid_tokens() {
            findings += 1;
            println!(
                "   ⚠️  {}",
                format!(
                    "row {row}: invalid range token '{token}' (rows it names will not export)"
                )
                .yellow()
            );
        }

        if let Some(names) = &sheet_names {
            if !cfg.sheet_name.is_empty() && !names.contains(&cfg.sheet_name) {
                findings += 1;
                println!(
                    "   ⚠️  {}",
                    format!("row {row}: sheet '{}' not found in workbook", cfg.sheet_name)
                        .yellow()
                );
            }
        }
    }

    println!();
    if findings > 0 {
        return Err(CastError::Config(format!(
            "{findings} problem(s) found in {}",
            config_path.display()
        )));
    }

    println!("{}", "✅ Configuration looks good".bold().green());
    Ok(())
}

/// Execute the sheets command: list a workbook's sheets with dimensions.
pub fn sheets(workbook_path: PathBuf) -> CastResult<()> {
    let mut reader = WorkbookReader::open(&workbook_path)?;

    println!("{}", "📄 Sheets".bold().green());
    println!("   Workbook: {}\n", workbook_path.display());

    for name in reader.sheet_names() {
        let (rows, cols) = reader.sheet_size(&name)?;
        println!("   {} ({} rows x {} cols)", name.cyan(), rows, cols);
    }

    Ok(())
}
