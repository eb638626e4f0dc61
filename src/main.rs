use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use cards_cleaner::error::Result;
use cards_cleaner::logging;
use cards_cleaner::normalize::normalize;
use cards_cleaner::storage::{read_cards, write_cards};

/// Normalize a card catalog's tags into trash/soft categories.
#[derive(Parser, Debug)]
#[command(name = "cards_cleaner")]
#[command(about = "Clean card catalog tags into trash/soft categories")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the card catalog JSON file to clean
    #[arg(long, default_value = "cards.json")]
    input: PathBuf,

    /// Path to write the cleaned catalog to
    #[arg(long, default_value = "cards_clean.json")]
    output: PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    info!(input = %cli.input.display(), "loading card catalog");
    let cards = read_cards(&cli.input)?;

    let (cards, summary) = normalize(cards)?;

    write_cards(&cli.output, &cards)?;
    info!(
        output = %cli.output.display(),
        total = summary.total,
        trash = summary.trash,
        soft = summary.soft,
        "catalog cleaned"
    );

    println!("✅ {} cartes nettoyées !", summary.total);
    println!("\n📊 Cleaning results:");
    println!("   Trash: {}", summary.trash);
    println!("   Soft: {}", summary.soft);
    println!("   Output file: {}", cli.output.display());

    Ok(())
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("Cleaning failed: {e}");
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
