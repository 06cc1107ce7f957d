//! Command-line front end for recovering readable text from binary
//! conversation logs.
//!
//! Decodes one log file — given directly, or picked as the most recently
//! modified log in a directory — and prints the recovered fragments,
//! newest last. All filter thresholds are exposed as flags because they
//! were tuned empirically against one log family and routinely need
//! adjusting on another.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use pbglean::{ExtractOptions, extract_from_path, latest_log_file};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pbglean", version, about = "Recover readable text from binary conversation logs")]
struct Cli {
    /// Log file to decode.
    #[arg(value_name = "FILE", conflicts_with = "dir")]
    file: Option<PathBuf>,

    /// Decode the most recently modified log file in this directory instead.
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// File extension (without dot) searched for with --dir.
    #[arg(long, default_value = "pb")]
    extension: String,

    /// Print only the last N fragments; 0 prints everything.
    #[arg(long, default_value_t = 20)]
    tail: usize,

    /// Minimum fragment length in characters.
    #[arg(long)]
    min_len: Option<usize>,

    /// Highest tolerated fraction of non-text characters per fragment.
    #[arg(long)]
    noise_ratio: Option<f64>,

    /// Recursion cap for nested payloads.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Keep everything the decoder harvests (lowers the filter floor to the
    /// harvest floor).
    #[arg(long, conflicts_with = "min_len")]
    raw: bool,

    /// Emit a JSON report instead of separator-delimited text.
    #[arg(long)]
    json: bool,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Everything a host needs to reproduce an extraction: where the fragments
/// came from and which thresholds were in force.
#[derive(Serialize)]
struct Report<'a> {
    source: &'a Path,
    options: &'a ExtractOptions,
    count: usize,
    fragments: &'a [String],
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn build_options(cli: &Cli) -> ExtractOptions {
    let mut options = ExtractOptions::default();
    if let Some(depth) = cli.max_depth {
        options.max_depth = depth;
    }
    if cli.raw {
        options.filter.min_len = options.min_harvest_len;
    } else if let Some(min_len) = cli.min_len {
        options.filter.min_len = min_len;
    }
    if let Some(ratio) = cli.noise_ratio {
        options.filter.max_noise_ratio = ratio;
    }
    options
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = match (&cli.file, &cli.dir) {
        (Some(file), _) => file.clone(),
        (None, Some(dir)) => latest_log_file(dir, &cli.extension)
            .with_context(|| format!("selecting a log in {}", dir.display()))?,
        (None, None) => bail!("pass a log FILE or --dir DIRECTORY"),
    };

    let options = build_options(&cli);
    debug!("decoding {} with {options:?}", path.display());

    let fragments = extract_from_path(&path, &options)
        .with_context(|| format!("extracting from {}", path.display()))?;
    info!("recovered {} fragments from {}", fragments.len(), path.display());

    let shown = if cli.tail == 0 || cli.tail >= fragments.len() {
        &fragments[..]
    } else {
        &fragments[fragments.len() - cli.tail..]
    };

    if cli.json {
        let report = Report {
            source: &path,
            options: &options,
            count: fragments.len(),
            fragments: shown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if fragments.is_empty() {
        info!("no readable fragments survived filtering");
    } else {
        for fragment in shown {
            println!("----------------------");
            println!("{fragment}");
        }
    }

    Ok(())
}
