use anyhow::Result;
use clap::{Parser, ValueEnum};
use search_core::{Corpus, SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::{fmt, EnvFilter};

mod output;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "search-console")]
#[command(about = "Rank documents against queries read from a corpus file or stdin", long_about = None)]
struct Cli {
    /// Corpus file: stop words, document count, documents, then queries. Reads stdin when absent.
    #[arg(long)]
    input: Option<String>,
    /// Maximum number of documents printed per query
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let corpus = match &cli.input {
        Some(path) => Corpus::open(path)?,
        None => Corpus::read(io::stdin().lock())?,
    };
    tracing::info!(documents = corpus.documents.len(), queries = corpus.queries.len(), "corpus loaded");

    let server = corpus.build(SearchConfig { max_results: cli.max_results })?;

    let mut out = BufWriter::new(io::stdout().lock());
    for query in &corpus.queries {
        let top = server.find_top_documents(query);
        match cli.format {
            Format::Text => output::write_text(&mut out, &top)?,
            Format::Json => {
                serde_json::to_writer(&mut out, &top)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
