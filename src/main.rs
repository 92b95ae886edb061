//! sizedist - directory inventory and size distribution analyzer.
//!
//! Usage:
//!   sizedist [PATH]              Scan a directory and report
//!   sizedist scan [PATH]         Same, with knobs (cap, bins, output)
//!   sizedist compare <A> <B>     Compare two exported snapshots
//!   sizedist gen [PATH]          Create a synthetic test folder
//!   sizedist --help              Show help

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use sizedist_analyze::{
    DEFAULT_BIN_COUNT, EmpiricalCdf, ExtensionMap, SizeHistogram, SizeSummary, distribution,
    extensions, stats, years,
};
use sizedist_core::{FileRecord, Inventory};
use sizedist_report::{ScanSnapshot, SnapshotComparison, SnapshotError, TOP_EXTENSIONS};
use sizedist_scan::{ScanConfig, Scanner};

#[derive(Parser)]
#[command(
    name = "sizedist",
    version,
    about = "Directory inventory and file size distribution analyzer",
    long_about = "sizedist walks a directory tree, reports how file sizes are \
                  distributed across it, and exports a JSON snapshot that can \
                  be compared against a snapshot taken on another machine."
)]
struct Cli {
    /// Path to analyze (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory, print the analysis report, export a snapshot
    Scan {
        /// Path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Stop after collecting this many files
        #[arg(short, long)]
        max_files: Option<u64>,

        /// Number of histogram bins
        #[arg(short, long, default_value_t = DEFAULT_BIN_COUNT)]
        bins: usize,

        /// Large-file threshold (e.g. "50MB", "1GB")
        #[arg(short = 't', long, default_value = "50MB")]
        threshold: String,

        /// Snapshot output file (default: scan_results_<os>_<timestamp>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Compare two exported snapshots side by side
    Compare {
        /// First snapshot file
        left: PathBuf,
        /// Second snapshot file
        right: PathBuf,
    },

    /// Create a synthetic folder tree for exercising the scanner
    Gen {
        /// Where to create the tree
        #[arg(default_value = "test_folder")]
        path: PathBuf,

        /// Number of files to create
        #[arg(short = 'n', long, default_value = "200")]
        files: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Scan {
            path,
            max_files,
            bins,
            threshold,
            output,
            format,
        }) => run_scan(&path, max_files, bins, &threshold, output, format),
        Some(Command::Compare { left, right }) => run_compare(&left, &right),
        Some(Command::Gen { path, files }) => run_gen(&path, files),
        None => run_scan(
            &cli.path,
            None,
            DEFAULT_BIN_COUNT,
            "50MB",
            None,
            OutputFormat::Text,
        ),
    }
}

/// Scan, analyze, report, and export.
fn run_scan(
    path: &Path,
    max_files: Option<u64>,
    bins: usize,
    threshold: &str,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let threshold_bytes = parse_size(threshold)?;

    let mut builder = ScanConfig::builder();
    builder.root(path);
    if let Some(cap) = max_files {
        builder.max_files(cap);
    }
    let config = builder.build().context("Invalid scan configuration")?;

    eprintln!("Scanning {}...", path.display());

    let scanner = Scanner::new();
    let mut progress_rx = scanner.subscribe();
    let progress_handle = std::thread::spawn(move || {
        while let Ok(progress) = progress_rx.blocking_recv() {
            eprintln!(
                "  {} files, {} so far...",
                progress.files_scanned,
                format_size(progress.bytes_scanned)
            );
        }
    });

    let scan_result = scanner.scan(&config);
    drop(scanner); // closes the progress channel so the printer thread exits
    let _ = progress_handle.join();
    let inventory = scan_result.context("Scan failed")?;

    if inventory.is_empty() {
        println!(
            "No files found under {} (empty, fully excluded, or unreadable).",
            path.display()
        );
        return Ok(());
    }

    let sizes = inventory.sizes();
    let summary = stats::summarize(&sizes).context("Statistics failed")?;
    let histogram = distribution::histogram(&sizes, bins).context("Histogram failed")?;
    let cdf = distribution::empirical_cdf(&sizes).context("CDF failed")?;
    let aggregates = extensions::by_extension(&inventory);
    let year_counts = years::by_year(&inventory);
    let large = extensions::largest_files(&inventory, threshold_bytes, 20);

    let snapshot = ScanSnapshot::export(&inventory);

    match format {
        OutputFormat::Text => print_report(
            path,
            &inventory,
            &summary,
            &histogram,
            &cdf,
            &aggregates,
            &year_counts,
            &large,
            threshold_bytes,
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    let output_path = output.unwrap_or_else(default_snapshot_path);
    snapshot
        .save(&output_path)
        .context("Failed to write snapshot")?;
    eprintln!("Snapshot saved to {}", output_path.display());

    Ok(())
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(format!(
        "scan_results_{}_{}.json",
        std::env::consts::OS,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Print the full console report for one scan.
#[allow(clippy::too_many_arguments)]
fn print_report(
    path: &Path,
    inventory: &Inventory,
    summary: &SizeSummary,
    histogram: &SizeHistogram,
    cdf: &EmpiricalCdf,
    aggregates: &ExtensionMap,
    year_counts: &BTreeMap<i32, u64>,
    large: &[FileRecord],
    threshold_bytes: u64,
) {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    println!();
    println!("{}", "─".repeat(70));
    println!(
        " {} - {} files, {}",
        path.display(),
        inventory.len(),
        format_size(inventory.total_size())
    );
    if inventory.skipped > 0 {
        println!(" {} unreadable file(s) skipped", inventory.skipped);
    }
    println!("{}", "─".repeat(70));

    let cdf_100kb = cdf.probability_at(100 * 1024);
    let top_share = cdf.top_fraction_share(0.10);
    println!();
    println!(" Are 90% of files smaller than 100 KB?");
    println!(
        "   CDF(100KB) = {:.2}% -> {}",
        cdf_100kb * 100.0,
        yes_no(cdf_100kb >= 0.9)
    );
    println!(" Do the largest 10% of files hold 90% of the bytes?");
    println!(
        "   largest 10% = {:.2}% of disk -> {}",
        top_share * 100.0,
        yes_no(top_share >= 0.9)
    );

    println!();
    println!(" Size statistics:");
    println!("   Mean:   {:>12.2} KB", summary.mean / KB);
    println!("   Median: {:>12.2} KB", summary.median / KB);
    println!("   Std:    {:>12.2} KB", summary.std_dev / KB);
    println!("   Min:    {:>12} bytes", summary.min);
    println!("   Max:    {:>12.2} MB", summary.max as f64 / MB);
    println!(
        "   p25 {:.2} KB | p50 {:.2} KB | p75 {:.2} KB | p90 {:.2} KB",
        summary.p25 / KB,
        summary.p50 / KB,
        summary.p75 / KB,
        summary.p90 / KB
    );
    println!(
        "   p95 {:.2} MB | p99 {:.2} MB",
        summary.p95 / MB,
        summary.p99 / MB
    );

    println!();
    println!(
        " Size histogram: {} bins over [{}, {}]",
        histogram.bin_count(),
        format_size(summary.min),
        format_size(summary.max)
    );
    print_densest_bins(histogram, 5);

    println!();
    println!(" Top {TOP_EXTENSIONS} extensions by file count:");
    let by_count = extensions::top_n_by_count(aggregates, TOP_EXTENSIONS);
    for (i, aggregate) in by_count.iter().enumerate() {
        println!(
            "  {:>2}. {:<14} {:>8} files ({:>5.2}%)",
            i + 1,
            aggregate.extension,
            aggregate.file_count,
            aggregate.percentage_of_files
        );
    }

    println!();
    println!(" Disk usage by extension:");
    let by_size = extensions::top_n_by_size(aggregates, TOP_EXTENSIONS);
    for (i, aggregate) in by_size.iter().enumerate() {
        println!(
            "  {:>2}. {:<14} {:>10} ({:>5.2}%) | {:>8} files | avg {:>9.2} KB",
            i + 1,
            aggregate.extension,
            format_size(aggregate.total_size_bytes),
            aggregate.percentage_of_disk,
            aggregate.file_count,
            aggregate.avg_size_bytes / KB
        );
    }

    println!();
    if large.is_empty() {
        println!(" No files larger than {}.", format_size(threshold_bytes));
    } else {
        println!(" Files larger than {}:", format_size(threshold_bytes));
        for (i, record) in large.iter().enumerate() {
            println!(
                "  {:>2}. {:>10} - {}",
                i + 1,
                format_size(record.size),
                record.path.display()
            );
        }
    }

    println!();
    println!(" Files by modification year:");
    let max_year_count = year_counts.values().copied().max().unwrap_or(1);
    for (year, count) in year_counts {
        let bar_len = ((*count as f64 / max_year_count as f64) * 30.0) as usize;
        println!("   {} {:>8} files  {}", year, count, "█".repeat(bar_len));
    }
    println!();
}

/// Show the most populated histogram bins with relative bars.
fn print_densest_bins(histogram: &SizeHistogram, top_n: usize) {
    let mut ranked: Vec<(usize, u64)> = histogram
        .counts
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    let max_count = ranked.first().map(|&(_, c)| c).unwrap_or(1);
    for (bin, count) in ranked {
        let lo = histogram.edges[bin] as u64;
        let hi = histogram.edges[bin + 1] as u64;
        let bar_len = ((count as f64 / max_count as f64) * 30.0) as usize;
        println!(
            "   {:>10} - {:<10} {:>8} files  {}",
            format_size(lo),
            format_size(hi),
            count,
            "█".repeat(bar_len)
        );
    }
}

/// Load two snapshots and print the side-by-side comparison.
fn run_compare(left_path: &Path, right_path: &Path) -> Result<()> {
    let left = match ScanSnapshot::load(left_path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            report_load_error(&err);
            return Ok(());
        }
    };
    let right = match ScanSnapshot::load(right_path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            report_load_error(&err);
            return Ok(());
        }
    };

    let comparison = SnapshotComparison::new(&left, &right);

    println!();
    println!("{}", "═".repeat(78));
    println!(" SNAPSHOT COMPARISON");
    println!("{}", "═".repeat(78));

    println!();
    println!(
        " System 1: {} ({}), scanned {}",
        comparison.left_system.os, comparison.left_system.platform, comparison.left_system.scan_date
    );
    println!(
        " System 2: {} ({}), scanned {}",
        comparison.right_system.os,
        comparison.right_system.platform,
        comparison.right_system.scan_date
    );

    println!();
    println!(" {:<28} {:>20} {:>20}", "Metric", "System 1", "System 2");
    println!(" {}", "─".repeat(70));
    println!(
        " {:<28} {:>20} {:>20}",
        "Total files", comparison.left_summary.total_files, comparison.right_summary.total_files
    );
    println!(
        " {:<28} {:>20.2} {:>20.2}",
        "Total size (GB)",
        comparison.left_summary.total_size_gb,
        comparison.right_summary.total_size_gb
    );
    println!(
        " {:<28} {:>20} {:>20}",
        "Unique extensions",
        comparison.left_summary.unique_extensions,
        comparison.right_summary.unique_extensions
    );
    println!(
        " {:<28} {:>20} {:>20}",
        "Files w/o extension",
        comparison.left_summary.files_without_extension,
        comparison.right_summary.files_without_extension
    );

    println!();
    println!(" Top-{TOP_EXTENSIONS} extensions by file count:");
    println!(
        " {:<5} {:<18} {:>12}   {:<18} {:>12}",
        "Rank", "Extension", "Count", "Extension", "Count"
    );
    println!(" {}", "─".repeat(70));
    for row in &comparison.count_rows {
        println!(
            " {:<5} {:<18} {:>12}   {:<18} {:>12}",
            row.rank,
            row.left.extension,
            row.left.file_count,
            row.right.extension,
            row.right.file_count
        );
    }

    println!();
    println!(" Top-{TOP_EXTENSIONS} extensions by disk usage:");
    println!(
        " {:<5} {:<18} {:>12}   {:<18} {:>12}",
        "Rank", "Extension", "Size (GB)", "Extension", "Size (GB)"
    );
    println!(" {}", "─".repeat(70));
    for row in &comparison.size_rows {
        println!(
            " {:<5} {:<18} {:>12.2}   {:<18} {:>12.2}",
            row.rank,
            row.left.extension,
            row.left.total_size_gb,
            row.right.extension,
            row.right.total_size_gb
        );
    }

    println!();
    println!(
        " Common extensions in top-{TOP_EXTENSIONS}: {}",
        comparison.common_extensions.len()
    );
    println!(
        " Only in system 1: {} - {:?}",
        comparison.left_only.len(),
        comparison.left_only
    );
    println!(
        " Only in system 2: {} - {:?}",
        comparison.right_only.len(),
        comparison.right_only
    );
    println!();

    Ok(())
}

fn report_load_error(err: &SnapshotError) {
    match err {
        SnapshotError::NotFound { path } => {
            eprintln!("Error: snapshot not found: {}", path.display());
        }
        SnapshotError::Parse { path, .. } => {
            eprintln!("Error: invalid snapshot JSON in {}", path.display());
        }
        SnapshotError::Io { .. } => eprintln!("Error: {err}"),
    }
}

/// Create a synthetic folder tree with a known size mix.
fn run_gen(path: &Path, files: usize) -> Result<()> {
    use rand::Rng;
    use rand::seq::IndexedRandom;

    const FOLDERS: &[(&str, &[&str])] = &[
        ("Documents", &[".txt", ".pdf", ".docx", ".xlsx", ".pptx"]),
        ("Pictures", &[".jpg", ".png", ".gif", ".bmp"]),
        ("Videos", &[".mp4", ".avi", ".mkv", ".mov"]),
        ("Music", &[".mp3", ".wav", ".flac", ".m4a"]),
        ("Downloads", &[".zip", ".rar", ".exe", ".iso"]),
        ("Projects", &[".py", ".java", ".cpp", ".html", ".css"]),
    ];
    const ROOT_EXTENSIONS: &[&str] = &[".txt", ".log", ".ini", ".cfg"];

    let mut rng = rand::rng();
    std::fs::create_dir_all(path)?;

    let per_folder = files / FOLDERS.len();
    let mut created = 0usize;
    let mut total_bytes = 0u64;

    for (folder, folder_extensions) in FOLDERS {
        let folder_path = path.join(folder);
        std::fs::create_dir_all(&folder_path)?;

        for i in 0..per_folder {
            // 70% small, 20% medium, 10% large
            let roll: f64 = rng.random();
            let size: usize = if roll < 0.7 {
                rng.random_range(1_000..100_000)
            } else if roll < 0.9 {
                rng.random_range(100_000..5_000_000)
            } else {
                rng.random_range(5_000_000..20_000_000)
            };

            let extension = folder_extensions.choose(&mut rng).copied().unwrap_or(".dat");
            let file_path = folder_path.join(format!("file_{i:03}{extension}"));
            std::fs::write(&file_path, vec![b'X'; size])?;

            created += 1;
            total_bytes += size as u64;
        }
    }

    for i in 0..20 {
        let size: usize = rng.random_range(1_000..50_000);
        let extension = ROOT_EXTENSIONS.choose(&mut rng).copied().unwrap_or(".txt");
        std::fs::write(path.join(format!("readme_{i}{extension}")), vec![b'X'; size])?;
        created += 1;
        total_bytes += size as u64;
    }

    println!(
        "Created {} files ({}) under {}",
        created,
        format_size(total_bytes),
        path.display()
    );
    println!("Try: sizedist scan {}", path.display());

    Ok(())
}

fn yes_no(answer: bool) -> &'static str {
    if answer { "YES" } else { "NO" }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Parse a size string (e.g., "1KB", "10MB", "1GB").
fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num, multiplier) = if s.ends_with("GB") || s.ends_with("G") {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1024 * 1024 * 1024)
    } else if s.ends_with("MB") || s.ends_with("M") {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1024 * 1024)
    } else if s.ends_with("KB") || s.ends_with("K") {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1024)
    } else if s.ends_with('B') {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1)
    } else {
        let num: f64 = s.parse()?;
        (num, 1)
    };

    Ok((num * multiplier as f64) as u64)
}
