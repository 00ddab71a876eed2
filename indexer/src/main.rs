use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use tweetdex_core::source::build_from_path;
use tweetdex_core::{
    BuildReport, DuplicateIds, IndexConfig, Intersection, Lookup, Match, SearchIndex, Side, TermFolding,
};

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tweetdex")]
#[command(about = "Build an inverted index over a tweet corpus and run boolean term queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Corpus path (file or directory of tab-separated records)
    #[arg(long)]
    input: PathBuf,
    /// JSON file with an index configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Lowercase terms and strip punctuation before indexing and querying
    #[arg(long, default_value_t = false)]
    fold: bool,
    /// Record a repeated document id at most once per term
    #[arg(long, default_value_t = false)]
    merge_duplicates: bool,
    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every document containing a term
    Lookup {
        #[command(flatten)]
        index: IndexArgs,
        term: String,
    },
    /// List documents containing both terms
    And {
        #[command(flatten)]
        index: IndexArgs,
        term_a: String,
        term_b: String,
    },
    /// Build the index and print build statistics
    Stats {
        #[command(flatten)]
        index: IndexArgs,
    },
}

#[derive(Serialize)]
struct QueryResponse<'a, T> {
    query: Vec<&'a str>,
    took_s: f64,
    result: T,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Lookup { index, term } => {
            let (idx, _) = load_index(&index)?;
            let start = Instant::now();
            let result = idx.lookup(&term);
            let took_s = start.elapsed().as_secs_f64();
            if index.json {
                write_json(&mut out, &QueryResponse { query: vec![term.as_str()], took_s, result })?;
            } else {
                print_lookup(&mut out, &term, &result)?;
            }
        }
        Commands::And { index, term_a, term_b } => {
            let (idx, _) = load_index(&index)?;
            let start = Instant::now();
            let result = idx.intersect(&term_a, &term_b);
            let took_s = start.elapsed().as_secs_f64();
            if index.json {
                write_json(&mut out, &QueryResponse { query: vec![term_a.as_str(), term_b.as_str()], took_s, result })?;
            } else {
                print_intersection(&mut out, &result)?;
            }
        }
        Commands::Stats { index } => {
            let (_, report) = load_index(&index)?;
            if index.json {
                write_json(&mut out, &report)?;
            } else {
                print_report(&mut out, &report)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn load_index(args: &IndexArgs) -> Result<(SearchIndex, BuildReport)> {
    let mut config = match &args.config {
        Some(path) => IndexConfig::from_json_file(path)?,
        None => IndexConfig::default(),
    };
    if args.fold {
        config.folding = TermFolding::Folded;
    }
    if args.merge_duplicates {
        config.duplicates = DuplicateIds::Merge;
    }
    config.validate()?;
    tracing::debug!(?config, "index configuration");
    Ok(build_from_path(&args.input, config)?)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn print_matches<W: Write>(out: &mut W, matches: &[Match<'_>]) -> io::Result<()> {
    for m in matches {
        match m.text {
            Some(text) => writeln!(out, "{}\t{}", m.doc_id, text)?,
            None => writeln!(out, "{}", m.doc_id)?,
        }
    }
    Ok(())
}

fn print_lookup<W: Write>(out: &mut W, term: &str, result: &Lookup<'_>) -> io::Result<()> {
    match result {
        Lookup::Found { document_frequency, matches } => {
            writeln!(out, "document frequency: {document_frequency}")?;
            print_matches(out, matches)
        }
        Lookup::NotFound => writeln!(out, "search term {term:?} was not found"),
    }
}

fn print_intersection<W: Write>(out: &mut W, result: &Intersection<'_>) -> io::Result<()> {
    match result {
        Intersection::Matches { matches } => {
            writeln!(out, "matches: {}", matches.len())?;
            print_matches(out, matches)
        }
        Intersection::NoMatch => writeln!(out, "no match was found"),
        Intersection::TermNotFound { side, term } => {
            let which = match side {
                Side::Left => "A",
                Side::Right => "B",
            };
            writeln!(out, "search term {which} ({term:?}) was not found")
        }
    }
}

fn print_report<W: Write>(out: &mut W, report: &BuildReport) -> io::Result<()> {
    writeln!(out, "records:   {}", report.records)?;
    writeln!(out, "indexed:   {}", report.indexed)?;
    writeln!(out, "malformed: {}", report.malformed)?;
    writeln!(out, "terms:     {}", report.terms)?;
    writeln!(out, "documents: {}", report.documents)
}
