//! Card Marker CLI
//!
//! Command-line tool for turning pasted card lists into a merged,
//! sortable spreadsheet.

use clap::{Parser, Subcommand};
use marker_core::{
    find_latest_sheet, load_csv, merge_with_duplicates, parse_lines, save_csv, sort_records,
    write_json, Record, VARIANT_NORMAL,
};
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "marker-cli")]
#[command(about = "Card list to spreadsheet converter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse two card lists, merge them, and write the combined sheet
    Convert {
        /// File with the first (base pass) list; prompts for a paste if omitted
        #[arg(long)]
        first: Option<PathBuf>,

        /// File with the second (alternate finish) list; prompts for a paste if omitted
        #[arg(long)]
        second: Option<PathBuf>,

        /// Output file path
        #[arg(short, long, default_value = "cards.csv")]
        output: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Parse a single list and display the resulting table
    Parse {
        /// File with the list; prompts for a paste if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Force every record's variant to this value
        #[arg(long)]
        variant: Option<String>,
    },

    /// Reorder a stored sheet by collector number and variant tier
    Sort {
        /// Path to the sheet; auto-detects the newest CSV in the current
        /// directory if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> marker_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            first,
            second,
            output,
            format,
        } => cmd_convert(first.as_deref(), second.as_deref(), &output, &format),
        Commands::Parse { file, variant } => cmd_parse(file.as_deref(), variant.as_deref()),
        Commands::Sort { file } => cmd_sort(file),
    }
}

fn cmd_convert(
    first: Option<&Path>,
    second: Option<&Path>,
    output: &PathBuf,
    format: &str,
) -> marker_core::Result<()> {
    let lines_a = read_list(first, "Paste FIRST list:")?;
    let lines_b = read_list(second, "Paste SECOND list:")?;

    // The first pass is the base collection, so every record gets the
    // fixed base label; the second pass keeps its detected variants.
    let items_a = parse_lines(&lines_a, Some(VARIANT_NORMAL));
    let items_b = parse_lines(&lines_b, None);
    let merged = merge_with_duplicates(&items_a, &items_b);

    if merged.is_empty() {
        println!("No cards parsed. Please check the input format.");
        return Ok(());
    }

    match format.to_lowercase().as_str() {
        "csv" => save_csv(&merged, output)?,
        "json" => {
            let file = File::create(output)?;
            write_json(&merged, BufWriter::new(file))?;
        }
        _ => {
            eprintln!("Unknown format: {}. Supported formats: csv, json", format);
            std::process::exit(1);
        }
    }

    println!("Wrote {} rows to {}", merged.len(), output.display());

    Ok(())
}

fn cmd_parse(file: Option<&Path>, variant: Option<&str>) -> marker_core::Result<()> {
    let lines = read_list(file, "Paste list:")?;
    let records = parse_lines(&lines, variant);

    if records.is_empty() {
        println!("No cards parsed. Please check the input format.");
        return Ok(());
    }

    print_table(&records);
    println!();
    println!("{} record(s)", records.len());

    Ok(())
}

fn cmd_sort(file: Option<PathBuf>) -> marker_core::Result<()> {
    let path = match file {
        Some(p) => p,
        None => {
            let detected = find_latest_sheet(".")?;
            println!("Using detected file: {}", detected.display());
            detected
        }
    };

    let mut records = load_csv(&path)?;
    sort_records(&mut records);
    save_csv(&records, &path)?;

    println!("Reordered {} rows in {}", records.len(), path.display());

    Ok(())
}

/// Read a list from a file, or interactively from stdin when no path was
/// given (lines are collected until a lone "." or end of input).
fn read_list(path: Option<&Path>, prompt: &str) -> marker_core::Result<Vec<String>> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p).map_err(|e| marker_core::Error::FileRead {
                path: p.to_path_buf(),
                source: e,
            })?;
            Ok(content.lines().map(str::to_string).collect())
        }
        None => read_blocked_input(prompt),
    }
}

fn read_blocked_input(prompt: &str) -> marker_core::Result<Vec<String>> {
    println!("{}", prompt);
    println!("(Paste the list, then enter a single '.' on a new line to finish)");

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "." {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn print_table(records: &[Record]) {
    let header = ["Name", "Number", "Variant Type"];
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    for record in records {
        println!("{}\t{}\t{}", record.name, record.number, record.variant);
    }
}
