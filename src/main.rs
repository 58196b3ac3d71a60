//! Hybrid Bench CLI
//!
//! Side-by-side benchmarking of Qdrant vs Elasticsearch behind one combined
//! ingestion/search endpoint.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hybrid_bench::{
    api::ApiClient,
    batch::UploadBatch,
    config::Config,
    ingest::{IngestionReport, Ingestor},
    search::{Backend, SearchQuery, SearchReport, Searcher},
    session::{Session, Submit, Tab},
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Hybrid Bench - compare a vector store and a full-text engine side by side
#[derive(Parser)]
#[command(name = "hybrid-bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest documents into both backends and compare write times
    Ingest {
        /// Files or directories to upload (directories are expanded)
        paths: Vec<PathBuf>,
    },

    /// Query both backends and compare latency and ranking
    Search {
        /// The search query
        query: String,

        /// Number of results per backend
        #[arg(short = 'k', long)]
        limit: Option<usize>,
    },

    /// Interactive session with an ingest tab and a search tab
    Session,

    /// Test connectivity to the benchmark endpoint
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest { paths } => cmd_ingest(paths).await,
        Commands::Search { query, limit } => cmd_search(query, limit).await,
        Commands::Session => cmd_session().await,
        Commands::Test => cmd_test().await,
    }
}

async fn cmd_ingest(paths: Vec<PathBuf>) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let batch = UploadBatch::from_paths(&paths).context("Failed to read upload files")?;
    if batch.is_empty() {
        anyhow::bail!("No files to ingest.");
    }

    println!("Endpoint: {}", config.api.base_url);
    println!("Ingesting {} file(s) into both backends...", batch.len());

    let client = ApiClient::new(config.api);
    let ingestor = Ingestor::new(client);

    let start = Instant::now();
    let report = ingestor
        .ingest(batch)
        .await
        .context("Ingestion failed")?
        .expect("non-empty batch always produces a report");
    let round_trip = start.elapsed();

    print_ingestion_report(&report);
    println!("  Round trip:            {:.2?}", round_trip);

    Ok(())
}

async fn cmd_search(query: String, limit: Option<usize>) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let query = SearchQuery::new(query, limit.unwrap_or(config.search.limit));
    if query.is_blank() {
        anyhow::bail!("Empty query, nothing to do.");
    }

    println!("Endpoint: {}", config.api.base_url);
    println!(
        "Searching for \"{}\" (limit {})...",
        query.query, query.limit
    );

    let client = ApiClient::new(config.api);
    let searcher = Searcher::new(client);

    let start = Instant::now();
    let report = searcher
        .search(&query)
        .await
        .context("Search failed")?
        .expect("non-blank query always produces a report");
    let round_trip = start.elapsed();

    print_search_report(&report);
    println!();
    println!("Round trip: {:.2?}", round_trip);

    Ok(())
}

async fn cmd_test() -> Result<()> {
    println!("Testing benchmark endpoint...\n");

    let config = Config::load().context("Failed to load configuration")?;

    println!("Configuration:");
    println!("  Endpoint:       {}", config.api.base_url);
    println!("  Default limit:  {}", config.search.limit);
    println!();

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Ok(());
    }

    let client = ApiClient::new(config.api);

    println!("Sending health check...");
    match client.health().await {
        Ok(()) => {
            println!("Endpoint is healthy.");
        }
        Err(e) => {
            println!("Health check failed: {}", e);
        }
    }

    Ok(())
}

/// Completion events delivered back to the session loop.
enum Event {
    Ingest(hybrid_bench::Result<Option<IngestionReport>>),
    Search(hybrid_bench::Result<Option<SearchReport>>),
}

async fn cmd_session() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let limit = config.search.limit;
    let client = ApiClient::new(config.api.clone());
    let ingestor = Ingestor::new(client.clone());
    let searcher = Searcher::new(client);

    let mut session = Session::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    println!("Hybrid search benchmark session");
    println!("Endpoint: {}", config.api.base_url);
    println!("Type 'help' for commands, 'quit' to leave.");
    prompt(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                let input = line.trim();
                if input.is_empty() {
                    prompt(&session);
                    continue;
                }

                let mut words = input.split_whitespace();
                match words.next().unwrap_or_default() {
                    "quit" | "exit" => break,
                    "help" => print_help(),
                    "show" => show_state(&session),
                    "tab" => match words.next() {
                        Some("ingest") => session.switch_tab(Tab::Ingest),
                        Some("search") => session.switch_tab(Tab::Search),
                        _ => println!("Usage: tab <ingest|search>"),
                    },
                    // Anything else is input for the active tab: file paths
                    // on the ingest tab, a query on the search tab.
                    _ => match session.active_tab() {
                        Tab::Ingest => submit_ingest(&mut session, &ingestor, &tx, input),
                        Tab::Search => submit_search(&mut session, &searcher, &tx, input, limit),
                    },
                }
                prompt(&session);
            }
            Some(event) = rx.recv() => {
                println!();
                match event {
                    Event::Ingest(outcome) => match session.settle_ingest(outcome) {
                        Ok(Some(report)) => print_ingestion_report(report),
                        Ok(None) => {}
                        Err(e) => println!("Ingestion failed: {}", e),
                    },
                    Event::Search(outcome) => match session.settle_search(outcome) {
                        Ok(Some(report)) => print_search_report(report),
                        Ok(None) => {}
                        Err(e) => println!("Search failed: {}", e),
                    },
                }
                prompt(&session);
            }
        }
    }

    Ok(())
}

fn submit_ingest(
    session: &mut Session,
    ingestor: &Ingestor,
    tx: &mpsc::UnboundedSender<Event>,
    input: &str,
) {
    let paths: Vec<PathBuf> = input.split_whitespace().map(PathBuf::from).collect();
    let batch = match UploadBatch::from_paths(&paths) {
        Ok(batch) => batch,
        Err(e) => {
            println!("Failed to read files: {}", e);
            return;
        }
    };

    match session.begin_ingest(&batch) {
        Submit::Started => {
            println!("Ingesting {} file(s)...", batch.len());
            let ingestor = ingestor.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(Event::Ingest(ingestor.ingest(batch).await));
            });
        }
        Submit::Busy => println!("An ingestion run is already in flight; submission dropped."),
        Submit::Empty => println!("No files to ingest."),
    }
}

fn submit_search(
    session: &mut Session,
    searcher: &Searcher,
    tx: &mpsc::UnboundedSender<Event>,
    input: &str,
    limit: usize,
) {
    let query = SearchQuery::new(input, limit);

    match session.begin_search(&query) {
        Submit::Started => {
            println!("Searching for \"{}\"...", query.query);
            let searcher = searcher.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(Event::Search(searcher.search(&query).await));
            });
        }
        Submit::Busy => println!("A search is already in flight; submission dropped."),
        Submit::Empty => println!("Empty query, nothing to do."),
    }
}

fn prompt(session: &Session) {
    print!("[{}]> ", tab_name(session.active_tab()));
    let _ = std::io::stdout().flush();
}

fn tab_name(tab: Tab) -> &'static str {
    match tab {
        Tab::Ingest => "ingest",
        Tab::Search => "search",
    }
}

fn print_help() {
    println!("Commands:");
    println!("  tab <ingest|search>   switch the active tab");
    println!("  show                  print session state and latest reports");
    println!("  help                  this message");
    println!("  quit                  leave the session");
    println!();
    println!("Anything else is input for the active tab:");
    println!("  [ingest]  file and directory paths to upload");
    println!("  [search]  a query to run against both backends");
}

fn show_state(session: &Session) {
    println!("Active tab:           {}", tab_name(session.active_tab()));
    println!("Ingestion in flight:  {}", session.ingest_in_flight());
    println!("Search in flight:     {}", session.search_in_flight());

    match session.last_ingestion() {
        Some(report) => print_ingestion_report(report),
        None => println!("No ingestion report yet."),
    }
    match session.last_search() {
        Some(report) => print_search_report(report),
        None => println!("No search report yet."),
    }
}

fn print_ingestion_report(report: &IngestionReport) {
    println!();
    println!("Ingestion Complete");
    println!("{}", "─".repeat(60));
    println!("  Total chunks created:  {}", report.chunks);
    println!("  Qdrant write time:     {:.2} ms", report.qdrant_time_ms);
    println!("  Elastic write time:    {:.2} ms", report.elastic_time_ms);
}

fn print_search_report(report: &SearchReport) {
    for backend in Backend::ALL {
        println!();
        println!("{} ({:.2} ms)", backend.label(), report.time_ms(backend));
        println!("{}", "─".repeat(60));

        let hits = report.results(backend);
        if hits.is_empty() {
            println!("  No results found.");
            continue;
        }

        // Rendered exactly in the order received: each list is the owning
        // backend's relevance ranking.
        for (i, hit) in hits.iter().enumerate() {
            println!("{:>2}. {} (score {:.4})", i + 1, hit.source, hit.score);
            for line in hit.text.lines().take(3) {
                println!("      {}", line);
            }
        }
    }
}
