use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use seqcomp_rs::analyze_nucleotide;

/// Fixed relative output path; the tool expects to run from a working
/// directory with sibling data/ and output/ directories.
const RESULT_PATH: &str = "../output/analysis_results.txt";

#[derive(Debug, Parser)]
#[command(version, about = "Nucleotide composition analysis for FASTA files", long_about = None)]
struct Cli {
    /// Input FASTA file (.fasta or .fasta.gz)
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("Usage: dna-comp <fasta_file>");
        println!("Example: dna-comp ../data/sample1.fasta");
        return ExitCode::from(1);
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(format!("Analyzing {}...", input.display()));

    let analysis = match analyze_nucleotide(&input) {
        Ok(analysis) => analysis,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };
    spinner.finish_and_clear();

    print!("{}", analysis.get_report());

    // The screen report is the primary output; a result-file failure is
    // only a warning.
    match fs::write(RESULT_PATH, analysis.get_summary()) {
        Ok(()) => println!("\nResults saved to: {RESULT_PATH}"),
        Err(e) => eprintln!("Warning: could not write {RESULT_PATH}: {e}"),
    }

    ExitCode::SUCCESS
}
