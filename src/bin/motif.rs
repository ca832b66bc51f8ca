//! `motif` — find recurring words and phrases in journal entries.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use motif_engine::{
    parse_date, summarize, Corpus, ExtractParams, Motif, MotifConfig, MotifResult, Tokenizer,
};

#[derive(Parser)]
#[command(name = "motif", version, about = "Recurring-motif extraction for journal text")]
struct Cli {
    /// Config file (default: <config dir>/motif/config.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the recurring words and phrases of a corpus.
    Extract {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        tuning: TuningArgs,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the tokens of a text (stdin when omitted).
    Tokenize {
        text: Option<String>,
        /// Extra stop words.
        #[arg(long = "stopword")]
        stopwords: Vec<String>,
        /// Print term frequencies instead of the token stream.
        #[arg(long)]
        counts: bool,
    },
    /// Corpus statistics plus top words and phrases.
    Insights {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        tuning: TuningArgs,
        /// How many words and phrases to list.
        #[arg(long, default_value_t = 5)]
        top: usize,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// `.json` entry arrays or plain-text files. Reads blank-line separated
    /// entries from stdin when empty.
    paths: Vec<PathBuf>,
    /// Only entries dated on or after this day (YYYY-MM-DD).
    #[arg(long)]
    since: Option<String>,
    /// Only entries dated on or before this day (YYYY-MM-DD).
    #[arg(long)]
    until: Option<String>,
}

#[derive(Args)]
struct TuningArgs {
    #[arg(long)]
    top_k: Option<usize>,
    #[arg(long)]
    min_global: Option<usize>,
    #[arg(long)]
    min_per_doc: Option<usize>,
    /// Extra stop words, repeatable.
    #[arg(long = "stopword")]
    stopwords: Vec<String>,
}

impl TuningArgs {
    fn apply(self, mut params: ExtractParams) -> ExtractParams {
        if let Some(k) = self.top_k {
            params.top_k = k;
        }
        if let Some(n) = self.min_global {
            params.min_global_count = n;
        }
        if let Some(n) = self.min_per_doc {
            params.min_per_document_count = n;
        }
        params.stopwords(self.stopwords)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> MotifResult<()> {
    let config = match &cli.config {
        Some(path) => MotifConfig::load(path)?,
        None => MotifConfig::discover()?,
    };
    let defaults = config.extract_params()?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Extract {
            input,
            tuning,
            json,
        } => {
            let documents = load_documents(&input)?;
            let params = tuning.apply(defaults);
            let motifs = motif_engine::extract_motifs(&documents, &params);
            if json {
                serde_json::to_writer_pretty(&mut out, &motifs)?;
                writeln!(out)?;
            } else {
                print_motifs(&mut out, &motifs)?;
            }
        }
        Command::Tokenize {
            text,
            stopwords,
            counts,
        } => {
            let text = match text {
                Some(t) => t,
                None => read_stdin()?,
            };
            let params = defaults.stopwords(stopwords);
            let tokenizer = Tokenizer::with_stop_words(params.stop_words());
            if counts {
                let mut freqs: Vec<(String, usize)> =
                    tokenizer.term_frequencies(&text).into_iter().collect();
                freqs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                for (term, count) in freqs {
                    writeln!(out, "{count:>6}  {term}")?;
                }
            } else {
                for token in tokenizer.tokenize(&text) {
                    writeln!(out, "{token}")?;
                }
            }
        }
        Command::Insights {
            input,
            tuning,
            top,
            json,
        } => {
            let documents = load_documents(&input)?;
            let params = tuning.apply(defaults);
            let insights = summarize(&documents, &params, top);
            if json {
                serde_json::to_writer_pretty(&mut out, &insights)?;
                writeln!(out)?;
            } else {
                let s = &insights.stats;
                writeln!(
                    out,
                    "{} entries ({} empty), {} tokens, {} distinct words, {} distinct phrases",
                    s.documents, s.empty_documents, s.tokens, s.distinct_words, s.distinct_bigrams
                )?;
                writeln!(out, "\nTop words:")?;
                print_motifs(&mut out, &insights.top_words)?;
                writeln!(out, "\nTop phrases:")?;
                print_motifs(&mut out, &insights.top_phrases)?;
            }
        }
    }
    Ok(())
}

fn load_documents(input: &InputArgs) -> MotifResult<Vec<String>> {
    let corpus = if input.paths.is_empty() {
        Corpus::from_paragraphs(&read_stdin()?)
    } else {
        Corpus::load_all(&input.paths)?
    };
    let since = input.since.as_deref().map(parse_date).transpose()?;
    let until = input.until.as_deref().map(parse_date).transpose()?;
    Ok(corpus.between(since, until).documents())
}

fn read_stdin() -> MotifResult<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_motifs(out: &mut impl Write, motifs: &[Motif]) -> MotifResult<()> {
    if motifs.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for m in motifs {
        writeln!(out, "{:>6}  {}", m.count, m.term)?;
    }
    Ok(())
}
