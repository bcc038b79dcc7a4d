use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tweet_gen_core::model::generation_input::DEFAULT_MAX_WORDS;
use tweet_gen_core::{GenerationInput, MarkovChain};

mod logging;
mod output;

use output::{OutputFormat, write_tweet};

/// Generates random tweets from a text corpus with a word-level Markov chain.
#[derive(Parser, Debug)]
#[command(name = "tweet-gen", version)]
struct Cli {
	/// Seed of the random source
	seed: u64,

	/// Number of tweets to generate
	tweets: usize,

	/// Corpus file, split on whitespace
	path: PathBuf,

	/// Maximum number of words read from the corpus (0 reads everything)
	words_to_read: Option<usize>,

	#[arg(long, default_value_t = DEFAULT_MAX_WORDS, help = "Maximum number of words per tweet")]
	max_words: usize,

	#[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
	format: OutputFormat,

	#[arg(long, default_value = "warn", help = "Log filter (tracing EnvFilter syntax)")]
	log_level: String,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
	let mut input = GenerationInput::new(cli.seed);
	input.tweets = cli.tweets;
	input.word_limit = cli.words_to_read;
	input.set_max_words(cli.max_words)?;

	let chain = MarkovChain::from_file(&cli.path, input.word_limit)?;
	info!(
		path = %cli.path.display(),
		words = chain.store().len(),
		"corpus loaded"
	);

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	for (i, tweet) in chain.tweets(&input).enumerate() {
		write_tweet(&mut out, cli.format, i + 1, &tweet?)?;
	}
	out.flush()?;
	Ok(())
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	if let Err(e) = logging::init_logging(&cli.log_level) {
		eprintln!("Error: {e}");
		return ExitCode::FAILURE;
	}

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}");
			ExitCode::FAILURE
		}
	}
}
