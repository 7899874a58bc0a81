use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{json, Map};

use verse_gen_core::dictionary::EmptyDictionary;
use verse_gen_core::generate::{generate, GenerationOutput, Technique};

const SOURCE: &str = "Morning fog settles across the harbor while fishermen haul \
    silver nets toward patient boats. Old women carry baskets of bread past \
    shuttered windows and children chase paper kites over cobbled squares. \
    Bells ring from distant towers, calling sleepy pigeons into pale light. \
    Merchants unfold striped awnings above crates of lemons, olives and figs. \
    Somewhere a violin practices scales behind green shutters while the tide \
    writes slow letters against stone stairs and gulls answer with rude \
    laughter as evening arrives wearing purple.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The generator owns no randomness: the caller seeds it.
    // A fixed seed reproduces every poem below exactly.
    let mut rng = StdRng::seed_from_u64(2024);

    // No options at all: every technique carries its own defaults.
    let output = generate(SOURCE, Technique::CutUp, &Map::new(), &EmptyDictionary, &mut rng)?;
    println!("--- cut-up ---\n{}\n", output.as_text().unwrap_or_default());

    // Techniques with required options take them through the options map.
    let mut options = Map::new();
    options.insert("spine_word".to_owned(), json!("fog"));
    let output = generate(SOURCE, Technique::Mesostic, &options, &EmptyDictionary, &mut rng)?;
    println!("--- mesostic (spine 'fog') ---\n{}\n", output.as_text().unwrap_or_default());

    // Supplied options merge over the defaults.
    let mut options = Map::new();
    options.insert("letter".to_owned(), json!("s"));
    options.insert("num_lines".to_owned(), json!(4));
    options.insert("line_length".to_owned(), json!("short"));
    let output = generate(SOURCE, Technique::Alliterative, &options, &EmptyDictionary, &mut rng)?;
    println!("--- alliterative ('s') ---\n{}\n", output.as_text().unwrap_or_default());

    // Erasure returns a structured document rather than joined lines.
    let mut options = Map::new();
    options.insert("num_pages".to_owned(), json!(2));
    options.insert("words_per_page".to_owned(), json!(20));
    options.insert("words_to_keep".to_owned(), json!(4));
    let output = generate(SOURCE, Technique::Erasure, &options, &EmptyDictionary, &mut rng)?;
    println!("--- erasure (as JSON) ---\n{}\n", serde_json::to_string_pretty(&output)?);

    // Validation failures are ordinary values carrying their message.
    let mut options = Map::new();
    options.insert("keyword".to_owned(), json!("zeppelin"));
    match generate(SOURCE, Technique::Kwic, &options, &EmptyDictionary, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(error) => println!("--- kwic on a missing keyword ---\n{}\n", error),
    }

    // Unknown identifiers are a configuration error, raised before any work.
    match Technique::from_str("limerick") {
        Ok(_) => println!("Should not happen"),
        Err(error) => println!("--- unknown technique ---\n{}", error),
    }

    // Dispatch also accepts identifiers parsed from strings, e.g. "found".
    let technique = Technique::from_str("found")?;
    let mut options = Map::new();
    options.insert("num_lines".to_owned(), json!(5));
    let output = generate(SOURCE, technique, &options, &EmptyDictionary, &mut rng)?;
    println!("\n--- found ---\n{}", output.as_text().unwrap_or_default());

    Ok(())
}
