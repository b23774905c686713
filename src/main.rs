use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use reduce_helper::{
    find_matches, find_matches_parallel, load, reduction_chain, Source, DEFAULT_HEADER_LINES,
    DEFAULT_WORD_LIST_URL,
};

#[derive(Parser, Debug)]
#[command(about = "Find nine-letter words that reduce letter by letter to A or I")]
struct Cli {
    /// Word list: a URL, a file path, or `-` for stdin
    #[arg(short, long, default_value = DEFAULT_WORD_LIST_URL)]
    source: Source,

    /// Lines to skip at the top of the word list
    #[arg(long, default_value_t = DEFAULT_HEADER_LINES)]
    skip_header: usize,

    /// Check candidates on all cores
    #[arg(long)]
    parallel: bool,

    /// Print the reduction chain found for each match
    #[arg(long)]
    chains: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Serialize)]
struct Report {
    elapsed_ms: u128,
    count: usize,
    word_list_hash: String,
    matches: Vec<Match>,
}

#[derive(Serialize)]
struct Match {
    word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<Vec<String>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let dictionary = load(&cli.source, cli.skip_header)
        .with_context(|| format!("unable to load dictionary from {}", cli.source))?;

    let start = Instant::now();
    let words = if cli.parallel {
        find_matches_parallel(&dictionary)
    } else {
        find_matches(&dictionary)
    };
    let elapsed_ms = start.elapsed().as_millis();

    let matches: Vec<Match> = words
        .into_iter()
        .map(|word| {
            let chain = cli.chains.then(|| reduction_chain(&dictionary, &word)).flatten();
            Match { word, chain }
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        let report = Report {
            elapsed_ms,
            count: matches.len(),
            word_list_hash: dictionary.fingerprint(),
            matches,
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Solving the riddle took {elapsed_ms}ms")?;
        writeln!(out, "Matching words count: {}", matches.len())?;
        for m in &matches {
            match &m.chain {
                Some(chain) => writeln!(out, "{}", chain.join(" -> "))?,
                None => writeln!(out, "{}", m.word)?,
            }
        }
    }
    Ok(())
}
