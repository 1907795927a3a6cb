use anyhow::Result;
use axum::Router;
use clap::Parser;
use search_core::{Corpus, SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
use search_server::build_app;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Corpus file: stop words, document count, then documents
    #[arg(long, default_value = "./corpus.txt")]
    corpus: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Maximum number of documents per search
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    // Build once; the sealed server is read-only from here on.
    let corpus = Corpus::open(&args.corpus)?;
    if !corpus.queries.is_empty() {
        tracing::warn!(queries = corpus.queries.len(), "ignoring query lines in corpus file");
    }
    let server = corpus.build(SearchConfig { max_results: args.max_results })?;
    let app: Router = build_app(Arc::new(server));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
