use std::{fs, path::{Path, PathBuf}, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use tf_idf_bag::{normalize_bytes, Bag, BagConfig, DocumentTerm, SentencePolicy, Term};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tf-idf-bag",
    about = "Rank the terms of a corpus by frequency and of each document by TF-IDF",
    version
)]
struct Cli {
    /// Files or directories, every file is one document
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// JSON file with build options, flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Normalize documents (lowercase, strip punctuation)
    #[arg(long)]
    normalize: bool,

    /// Remove stopwords of --language
    #[arg(long)]
    remove_stop_words: bool,

    /// Longest n-gram in tokens
    #[arg(long)]
    max_ngram_length: Option<usize>,

    /// Shorter tokens are ignored
    #[arg(long)]
    min_token_length: Option<usize>,

    /// Stopword language
    #[arg(long)]
    language: Option<String>,

    #[arg(long, value_enum)]
    sentence_policy: Option<PolicyArg>,

    /// Number of terms printed per list
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    SplitBeforeCleaning,
    Legacy,
    WholeTextFallback,
}

impl From<PolicyArg> for SentencePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::SplitBeforeCleaning => SentencePolicy::SplitBeforeCleaning,
            PolicyArg::Legacy => SentencePolicy::Legacy,
            PolicyArg::WholeTextFallback => SentencePolicy::WholeTextFallback,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    documents: usize,
    vocab_size: usize,
    terms: Vec<&'a Term>,
    ranked_documents: Vec<DocumentReport<'a>>,
}

#[derive(Serialize)]
struct DocumentReport<'a> {
    path: String,
    sentences: usize,
    terms: Vec<&'a DocumentTerm>,
}

fn load_config(cli: &Cli) -> Result<BagConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<BagConfig>(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => BagConfig::default(),
    };
    if cli.normalize {
        config.normalize = true;
    }
    if cli.remove_stop_words {
        config.remove_stop_words = true;
    }
    if let Some(n) = cli.max_ngram_length {
        config.max_ngram_length = n;
    }
    if let Some(n) = cli.min_token_length {
        config.min_token_length = n;
    }
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(policy) = cli.sentence_policy {
        config.sentence_policy = policy.into();
    }
    Ok(config)
}

// ディレクトリは直下のファイルのみ、名前順
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("reading directory {}", path.display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Read files in parallel, keeping the input order
/// Files that are not UTF-8 become empty documents.
fn load_documents(files: &[PathBuf]) -> Result<Vec<String>> {
    files
        .par_iter()
        .map(|path| -> Result<String> {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => normalize_bytes(e.as_bytes()).into_text(),
            };
            Ok(text)
        })
        .collect()
}

fn print_text(bag: &Bag, files: &[PathBuf], top: usize) {
    println!("documents: {}, terms: {}", bag.doc_num(), bag.vocab_size());
    println!();
    println!("corpus (by frequency)");
    for term in bag.top_terms(top) {
        println!("  {:<32} freq={:<6} idf={:.4}", term.term, term.frequency, term.idf);
    }
    for (doc, path) in bag.documents().iter().zip(files) {
        println!();
        println!("{} ({} sentences)", display_name(path), doc.sentence_num());
        for term in doc.top_terms(top) {
            println!("  {:<32} freq={:<6} tfidf={:.4}", term.term, term.frequency, term.tfidf);
        }
    }
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let files = collect_files(&cli.paths)?;
    if files.is_empty() {
        tracing::warn!("no files found");
    }
    let start = Instant::now();
    let documents = load_documents(&files)?;
    tracing::info!(files = files.len(), threads = rayon::current_num_threads(), "documents loaded");

    let bag: Bag = Bag::build(&documents, &config).context("building bag of words")?;
    tracing::info!(
        terms = bag.vocab_size(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "bag built"
    );

    if cli.json {
        let report = Report {
            documents: bag.doc_num(),
            vocab_size: bag.vocab_size(),
            terms: bag.top_terms(cli.top),
            ranked_documents: bag
                .documents()
                .iter()
                .zip(&files)
                .map(|(doc, path)| DocumentReport {
                    path: display_name(path),
                    sentences: doc.sentence_num(),
                    terms: doc.top_terms(cli.top),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&bag, &files, cli.top);
    }
    Ok(())
}
