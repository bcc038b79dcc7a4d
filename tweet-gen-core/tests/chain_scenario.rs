use rand::SeedableRng;
use rand::rngs::StdRng;

use tweet_gen_core::model::generator::generate;
use tweet_gen_core::model::sampler::{pick_next, pick_start};
use tweet_gen_core::{ChainError, MarkovChain, Termination};

const CORPUS: [&str; 9] = ["the", "cat", "sat", "on", "the", "mat.", "the", "dog", "ran."];

fn chain() -> MarkovChain {
	let mut chain = MarkovChain::new();
	chain.ingest(CORPUS, None).unwrap();
	chain
}

fn count(chain: &MarkovChain, from: &str, to: &str) -> Option<usize> {
	let store = chain.store();
	let from = store.find(from)?;
	let to = store.find(to)?;
	store.get(from).ok()?.frequency_list().count_of(to)
}

#[test]
fn builds_the_expected_nodes_and_edges() {
	let chain = chain();
	let store = chain.store();

	let words: Vec<_> = store.iter().map(|(_, node)| node.text()).collect();
	assert_eq!(words, vec!["the", "cat", "sat", "on", "mat.", "dog", "ran."]);

	assert_eq!(count(&chain, "the", "cat"), Some(1));
	assert_eq!(count(&chain, "the", "dog"), Some(1));
	assert_eq!(count(&chain, "the", "mat."), Some(1));
	assert_eq!(count(&chain, "cat", "sat"), Some(1));
	assert_eq!(count(&chain, "sat", "on"), Some(1));
	assert_eq!(count(&chain, "on", "the"), Some(1));
	assert_eq!(count(&chain, "dog", "ran."), Some(1));

	// Sentence boundaries never carry a transition.
	assert_eq!(count(&chain, "mat.", "the"), None);
	assert!(store.get(store.find("ran.").unwrap()).unwrap().frequency_list().is_empty());
}

#[test]
fn next_word_after_the_is_uniform_over_its_successors() {
	let chain = chain();
	let store = chain.store();
	let the = store.find("the").unwrap();

	let trials = 30_000;
	let mut rng = StdRng::seed_from_u64(11);
	let mut hits = [0usize; 3];
	for _ in 0..trials {
		let next = pick_next(store, the, &mut rng).unwrap().unwrap();
		match store.text(next).unwrap() {
			"cat" => hits[0] += 1,
			"mat." => hits[1] += 1,
			"dog" => hits[2] += 1,
			other => panic!("unexpected successor {other}"),
		}
	}

	for hit in hits {
		let observed = hit as f64 / trials as f64;
		assert!((observed - 1.0 / 3.0).abs() < 0.03, "observed {observed}");
	}
}

#[test]
fn walks_from_the_stay_within_five_words() {
	let chain = chain();
	let store = chain.store();
	let the = store.find("the").unwrap();
	let mut rng = StdRng::seed_from_u64(5);

	for _ in 0..500 {
		let tweet = generate(store, the, 5, &mut rng).unwrap();
		assert!(tweet.len() <= 5);
		assert_eq!(tweet.words()[0], "the");
		match tweet.termination() {
			Termination::Period => assert!(tweet.words().last().unwrap().ends_with('.')),
			Termination::Length => assert_eq!(tweet.len(), 5),
			Termination::DeadEnd => panic!("every non-terminal word has a successor here"),
		}
	}
}

#[test]
fn start_words_are_never_terminal() {
	let chain = chain();
	let store = chain.store();
	let mut rng = StdRng::seed_from_u64(3);
	for _ in 0..1_000 {
		let id = pick_start(store, &mut rng).unwrap();
		assert!(!store.get(id).unwrap().is_terminal());
	}
}

#[test]
fn empty_input_yields_an_empty_store() {
	let mut chain = MarkovChain::new();
	let stats = chain.ingest(Vec::<String>::new(), None).unwrap();
	assert_eq!(stats.words_read, 0);
	assert!(chain.store().is_empty());

	let mut rng = StdRng::seed_from_u64(0);
	assert!(matches!(pick_start(chain.store(), &mut rng), Err(ChainError::EmptyStore)));
	assert!(matches!(chain.random_tweet(5, &mut rng), Err(ChainError::EmptyStore)));
}

#[test]
fn terminal_only_corpus_fails_fast() {
	let mut chain = MarkovChain::new();
	chain.ingest(["one.", "two.", "three."], None).unwrap();

	let mut rng = StdRng::seed_from_u64(0);
	assert!(matches!(chain.random_tweet(5, &mut rng), Err(ChainError::NoStartCandidate)));
}
