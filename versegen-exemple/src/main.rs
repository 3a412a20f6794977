use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use versegen_core::model::conditional::ConditionalModel;
use versegen_core::model::corpus::{Corpus, ModelType};
use versegen_core::model::generator::{Generator, PoetryInput};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
fn read_file<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	// Assemble the corpus from the files named on the command line,
	// in the given order
	let files: Vec<String> = env::args().skip(1).collect();
	if files.is_empty() {
		return Err("usage: versegen-exemple <corpus.txt> [<corpus.txt> ...]".into());
	}
	let mut corpus = Corpus::new();
	for file in &files {
		corpus.add_source(file, read_file(file)?);
	}

	// Default generation settings: 12 lines of 3 to 7 words,
	// a blank line after every 4th
	let input = PoetryInput::default();
	let mut rng = rand::rng();

	// Train one bigram model per directional variant and print a poem
	// from each
	for (title, model_type) in [
		("Poetry using standard model", ModelType::Standard),
		("Poetry using backward model", ModelType::Backward),
		("Poetry using bidirectional model", ModelType::Bidirectional),
	] {
		let model = ConditionalModel::train(&corpus, 2, model_type)?;
		let generator = Generator::new(&model);

		println!("{title}");
		for line in generator.poetry(&input, &mut rng)? {
			println!("{line}");
		}
		println!();
	}

	Ok(())
}
