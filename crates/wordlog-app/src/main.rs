use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use wordlog_core::dictionary::Entry;
use wordlog_core::language::{FormAnalyzer, MorphResult, WordForms};
use wordlog_lang_english::DefinitionResolver;

mod profile;

#[derive(Debug, Parser)]
#[command(name = "wordlog", version, about = "Look up English words and their base forms")]
struct Cli {
    /// Words to look up; read from stdin, one per line, when omitted
    words: Vec<String>,

    /// JSON config file (defaults to ./config.json, then the environment)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print base-form analysis and inflections instead of definitions
    #[arg(long)]
    analyze: bool,

    /// Do not retry unresolved words with their base form
    #[arg(long)]
    no_retry: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Serialize)]
struct Analysis {
    word: String,
    #[serde(flatten)]
    result: MorphResult,
    forms: WordForms,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs)?;

    let words = if cli.words.is_empty() {
        read_words(io::stdin().lock())?
    } else {
        cli.words.clone()
    };

    let mut config = profile::load_config(cli.config.as_deref())?;
    if cli.no_retry {
        config.resolver.retry_with_base_form = false;
    }
    let resolver = DefinitionResolver::from_config(&config);

    let output = if cli.analyze {
        serde_json::to_string_pretty(&analyze(resolver.analyzer(), &words))?
    } else {
        let entries: Vec<Entry> = resolver.resolve_batch(&words).await;
        let unresolved = entries.iter().filter(|e| e.is_placeholder()).count();
        if unresolved > 0 {
            tracing::warn!("{} of {} words unresolved", unresolved, entries.len());
        }
        serde_json::to_string_pretty(&entries)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write output")?;
    Ok(())
}

fn init_tracing(verbose: bool, json: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("WORDLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

/// Non-blank trimmed lines
fn read_words(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read words from stdin")?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn analyze(analyzer: &dyn FormAnalyzer, words: &[String]) -> Vec<Analysis> {
    words
        .iter()
        .map(|word| {
            let result = analyzer.analyze(word);
            let forms = analyzer.forms(&result.base);
            Analysis {
                word: word.clone(),
                result,
                forms,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use wordlog_core::language::FormLabel;
    use wordlog_lang_english::EnglishMorphology;

    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["wordlog", "--no-retry", "-v", "running", "went"]);
        assert!(cli.no_retry);
        assert!(cli.verbose);
        assert!(!cli.analyze);
        assert_eq!(cli.words, vec!["running", "went"]);
    }

    #[test]
    fn reads_non_blank_lines() {
        let input = "apple\n\n  went  \n\t\nrunning";
        let words = read_words(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["apple", "went", "running"]);
    }

    #[test]
    fn analysis_pairs_base_with_forms() {
        let words = vec!["went".to_string()];
        let analysis = analyze(&EnglishMorphology::new(), &words);

        assert_eq!(analysis[0].result.base, "go");
        assert_eq!(analysis[0].result.label, Some(FormLabel::PastTense));
        assert_eq!(analysis[0].forms.past, "went");

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json[0]["base"], "go");
        assert_eq!(json[0]["word"], "went");
    }
}
