use anyhow::{Context, Result};
use chatmap::{ChatNode, TopicCluster, TopicOptions, cluster_topics, parse_transcript};
use clap::Parser;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const PREVIEW_CHARS: usize = 120;

/// Group a chat transcript's messages into labeled topics
#[derive(Parser, Debug)]
#[command(name = "chatmap", version, about)]
struct Cli {
    /// Transcript file, or `-` for stdin
    transcript: PathBuf,

    /// Number of topics (clamped to 2..=10 and the message count)
    #[arg(short, long)]
    k: Option<usize>,

    /// Vocabulary size cap
    #[arg(long, default_value_t = chatmap::DEFAULT_MAX_VOCAB)]
    max_vocab: usize,

    /// Terms per topic label
    #[arg(long, default_value_t = chatmap::DEFAULT_MAX_TERMS_PER_LABEL)]
    max_terms: usize,

    /// Print topics as JSON
    #[arg(long)]
    json: bool,

    /// Messages previewed per topic
    #[arg(long, default_value_t = 5)]
    show: usize,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let text = read_transcript(&cli.transcript)?;
    let root = parse_transcript(&text)
        .with_context(|| format!("Failed to parse {}", cli.transcript.display()))?;

    let mut options = TopicOptions::default()
        .with_max_vocab(cli.max_vocab)
        .with_max_terms_per_label(cli.max_terms);
    if let Some(k) = cli.k {
        options = options.with_k(k);
    }

    let topics = cluster_topics(&root.documents(), &options);

    if cli.json {
        let json = serde_json::to_string_pretty(&topics).context("Failed to serialize topics")?;
        println!("{}", json);
    } else {
        print_topics(&root, &topics, cli.show);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_transcript(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read transcript from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript {}", path.display()))
}

fn print_topics(root: &ChatNode, topics: &[TopicCluster], show: usize) {
    if topics.is_empty() {
        println!("No messages to cluster yet.");
        return;
    }

    let by_id: HashMap<&str, &ChatNode> = root
        .flatten()
        .into_iter()
        .map(|n| (n.id.as_str(), n))
        .collect();

    for topic in topics {
        println!("{}  ({} msgs)", topic.label, topic.member_ids.len());

        for id in topic.member_ids.iter().take(show) {
            if let Some(node) = by_id.get(id.as_str()) {
                println!("  [{}] {}", node.role.short_name(), preview(&node.content));
            }
        }

        if topic.member_ids.len() > show {
            println!("  … and {} more", topic.member_ids.len() - show);
        }
        println!();
    }
}

/// Collapse whitespace and truncate to `PREVIEW_CHARS`
fn preview(s: &str) -> String {
    let one = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if one.chars().count() > PREVIEW_CHARS {
        let cut: String = one.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        one
    }
}
