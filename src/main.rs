use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use implus_tools::json_check::DEFAULT_SKIP_DIRS;
use implus_tools::{
    check_json_files, convert_combined, extract_binary_dictionary, ConversionStats, HeaderCheck,
    JsonCheckConfig,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "implus-tools")]
#[command(about = "Dictionary converters and JSON checker for the IMPlus input method")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract words and heuristic frequencies from an AOSP binary dictionary
    ExtractBinary {
        /// Binary dictionary blob (.dict)
        input: Option<PathBuf>,

        /// Word list to write (word<TAB>frequency per line)
        output: Option<PathBuf>,

        /// Stats output file path
        #[arg(long)]
        stats_out: Option<PathBuf>,
    },

    /// Convert an AOSP .combined text export into a word list
    ConvertCombined {
        /// AOSP .combined file
        input: Option<PathBuf>,

        /// Word list to write (word<TAB>frequency per line)
        output: Option<PathBuf>,

        /// Stats output file path
        #[arg(long)]
        stats_out: Option<PathBuf>,
    },

    /// Recursively validate the syntax of every *.json file
    CheckJson {
        /// Root directory to scan
        #[arg(default_value = ".")]
        root_dir: PathBuf,

        /// Additional directory name to skip (repeatable)
        #[arg(long = "skip-dir")]
        skip_dirs: Vec<String>,

        /// Stop at the first failing file
        #[arg(long)]
        fail_fast: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // WHY: stdout carries the report, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    match args.command {
        Command::ExtractBinary {
            input,
            output,
            stats_out,
        } => {
            let (Some(input), Some(output)) = (input, output) else {
                println!("Usage: implus-tools extract-binary <input.dict> <output.txt>");
                return Ok(ExitCode::SUCCESS);
            };
            run_extract_binary(input, output, stats_out).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::ConvertCombined {
            input,
            output,
            stats_out,
        } => {
            let (Some(input), Some(output)) = (input, output) else {
                println!("Usage: implus-tools convert-combined <input.combined> <output.txt>");
                return Ok(ExitCode::SUCCESS);
            };
            run_convert_combined(input, output, stats_out).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckJson {
            root_dir,
            skip_dirs,
            fail_fast,
        } => run_check_json(root_dir, skip_dirs, fail_fast).await,
    }
}

async fn run_extract_binary(input: PathBuf, output: PathBuf, stats_out: Option<PathBuf>) -> Result<()> {
    let start = Instant::now();

    // WHY: the extractor is blocking file I/O plus a CPU-bound scan
    let (task_input, task_output) = (input.clone(), output.clone());
    let report = tokio::task::spawn_blocking(move || extract_binary_dictionary(&task_input, &task_output))
        .await?
        .with_context(|| format!("Error during binary dictionary extraction of {}", input.display()))?;

    let mut warnings = Vec::new();
    if let HeaderCheck::Mismatch { found } = report.header {
        println!("Warning: unexpected magic number {found:#010x}, output may be unreliable");
        warnings.push(format!("magic mismatch: {found:#010x}"));
    }
    println!("Success! Exported {} words to {}", report.words_written, output.display());

    if let Some(stats_path) = stats_out {
        let stats = ConversionStats {
            tool: "extract-binary".to_string(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            words_written: report.words_written as u64,
            candidates_scanned: Some(report.candidates_scanned as u64),
            duration_ms: start.elapsed().as_millis() as u64,
            warnings,
        };
        save_stats(&stats, &stats_path)?;
    }
    Ok(())
}

async fn run_convert_combined(input: PathBuf, output: PathBuf, stats_out: Option<PathBuf>) -> Result<()> {
    let start = Instant::now();

    let (task_input, task_output) = (input.clone(), output.clone());
    let count = tokio::task::spawn_blocking(move || convert_combined(&task_input, &task_output))
        .await?
        .with_context(|| format!("Error during combined parsing of {}", input.display()))?;

    println!("Success! Exported {} words to {}", count, output.display());

    if let Some(stats_path) = stats_out {
        let stats = ConversionStats {
            tool: "convert-combined".to_string(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            words_written: count as u64,
            candidates_scanned: None,
            duration_ms: start.elapsed().as_millis() as u64,
            warnings: Vec::new(),
        };
        save_stats(&stats, &stats_path)?;
    }
    Ok(())
}

fn save_stats(stats: &ConversionStats, path: &Path) -> Result<()> {
    stats.save(path)?;
    info!("Run stats written to {}", path.display());
    Ok(())
}

async fn run_check_json(root_dir: PathBuf, extra_skip_dirs: Vec<String>, fail_fast: bool) -> Result<ExitCode> {
    let mut skip_dirs: Vec<String> = DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect();
    skip_dirs.extend(extra_skip_dirs);

    let config = JsonCheckConfig {
        skip_dirs,
        fail_fast,
        ..Default::default()
    };

    let display_root = std::path::absolute(&root_dir).unwrap_or_else(|_| root_dir.clone());
    println!("Scanning directory: {}", display_root.display());

    let summary = check_json_files(&root_dir, config).await?;

    for issue in &summary.issues {
        println!("\n{issue}");
    }
    println!(
        "\nScan complete. Checked {} files, found {} errors.",
        summary.files_checked,
        summary.issues.len()
    );

    Ok(if summary.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
