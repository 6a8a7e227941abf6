use codex_core::{Generator, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see trait building and synthesis diagnostics
    env_logger::init();

    let sample = ["cat", "can", "bat"];

    // Every word derivable from the sample. Keep the sample tiny: the
    // number of results explodes with each word added
    let all = codex_core::words(&sample)?;
    log::info!("{} words derivable from {:?}", all.len(), sample);

    let mut short: Vec<&str> = all.iter().filter(|word| word.len() <= 4).collect();
    short.sort_unstable();
    println!("Short words: {}", short.join(", "));

    // A bounded random sample, different on every run
    for word in codex_core::words_n(&sample, 5)? {
        println!("Random word: {}", word);
    }

    // Options can restrict lengths and leave the sample words out
    let mut options = Options::default();
    options.set_length_bounds(4, 8)?;
    options.exclude_samples = true;

    // A seeded generator draws the same words on every run
    let names = ["shena", "thalia", "lorin", "marek"];
    let mut generator = Generator::seeded(&names, options, 2024)?;
    for (i, word) in generator.words_n(10).into_iter().enumerate() {
        println!("Generated name {}: {}", i + 1, word);
    }

    // Unknown symbols are rejected, the whole sample fails
    match codex_core::words(&["cat", "c4t"]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected sample: {}", e),
    }

    Ok(())
}
