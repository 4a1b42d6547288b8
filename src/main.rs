//! Command-line interface for converting wordnet TSV dumps into WN-LMF.
//!
//! ```text
//! tab2lmf okwn wn.tab > wnlmf.xml
//! ```

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tab2lmf_rs::{
    ConvertOptions, DEFAULT_ILI_MAP, IngestOptions, LexiconMeta, MetaTable,
    data::open_output,
    error::Result,
    parse::parse_lmf,
    progress::{ProgressCallback, ProgressUpdate},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a wordnet TSV dump into WN-LMF XML", long_about = None)]
struct Cli {
    /// The wordnet id code (e.g. okwn, copwn)
    wnid: String,

    /// The TSV file to produce the LMF from (plain or .gz)
    tsv: PathBuf,

    /// Only convert rows of this language
    language: Option<String>,

    /// ILI map file (`<ili-id> <synset-id>` per line)
    #[arg(long, default_value = DEFAULT_ILI_MAP)]
    ili_map: PathBuf,

    /// TOML file with additional lexicon metadata records
    #[arg(long)]
    meta: Option<PathBuf>,

    /// Write the document here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Proceed without asking for confirmation
    #[arg(short = 'y', long, default_value_t = false)]
    yes: bool,

    /// Skip malformed rows instead of aborting
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Re-parse the produced document and report element counts
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Set verbosity level (use -v, -vv, or -vvv for increasing verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Sets up logging based on verbosity level.
fn setup_logging(verbose: u8) {
    let log_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter(None, log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Creates a progress callback drawing a spinner on standard error.
fn create_progress_callback(pb: ProgressBar) -> ProgressCallback {
    Box::new(move |update: ProgressUpdate| {
        if update.current_item == 0 {
            pb.set_prefix(update.stage_description.clone());
            pb.enable_steady_tick(Duration::from_millis(100));
        }
        pb.set_position(update.current_item);
        if let Some(msg) = update.message {
            pb.set_message(msg);
        }
        if update.total_items.is_some() {
            pb.finish_and_clear();
        }
    })
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style_template =
        "{prefix:>12.cyan.bold} [{elapsed_precise}] {spinner} {pos} lines {msg}";
    if let Ok(style) = ProgressStyle::default_spinner().template(style_template) {
        pb.set_style(style);
    }
    pb
}

/// Prints the metadata record and asks the user whether to go on.
fn confirm(meta: &LexiconMeta) -> Result<bool> {
    eprintln!("\nThis is the meta info found for this wnid.\n");
    for (key, value) in meta.fields() {
        eprintln!("{}:{}", key.bold(), value);
    }
    eprintln!("\nDo you want to proceed? [yes|no]\n");

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Whether a confirmation answer means "go on".
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "yes" | "y" | "Y" | "Yes")
}

fn run(cli: Cli) -> Result<()> {
    let table = MetaTable::load(cli.meta.as_deref())?;
    let meta = table.get(&cli.wnid)?;

    if !cli.yes && !confirm(meta)? {
        eprintln!("Quitting...");
        return Ok(());
    }

    let options = ConvertOptions {
        ili_map: cli.ili_map,
        ingest: IngestOptions {
            language: cli.language,
            lenient: cli.lenient,
        },
    };

    let start = Instant::now();
    let pb = progress_bar();
    let result = tab2lmf_rs::convert_file(
        &cli.tsv,
        meta,
        &options,
        Some(create_progress_callback(pb.clone())),
    );
    pb.finish_and_clear();
    let xml = result?;
    info!("Conversion took {:?}", start.elapsed());

    let mut out = open_output(cli.output.as_deref())?;
    out.write_all(xml.as_bytes())?;
    out.flush()?;

    if cli.check {
        match parse_lmf(&xml) {
            Ok(resource) => {
                let summary = resource.summary();
                eprintln!(
                    "{} {} lexicon(s), {} lexical entries, {} senses, {} synsets",
                    "Checked:".green(),
                    summary.lexicons,
                    summary.lexical_entries,
                    summary.senses,
                    summary.synsets
                );
            }
            Err(e) => warn!("Written document could not be parsed back: {}", e),
        }
    }
    Ok(())
}

/// Main entry point for the CLI application.
fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("Conversion failed: {}", e);
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
