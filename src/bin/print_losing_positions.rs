use anyhow::Result;
use apple_nim::analysis::OutcomeTable;
use clap::Parser;

/// Print the basket sizes that are lost for the player to move.
#[derive(Parser)]
#[command(name = "print_losing_positions", version, about, long_about = None)]
struct Args {
    /// Largest basket to classify
    #[arg(long, default_value_t = 31)]
    up_to: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = OutcomeTable::new();
    let losing = table.losing_positions(args.up_to);
    let listed: Vec<String> = losing.iter().map(|pile| pile.to_string()).collect();
    println!("Losing baskets {}", listed.join(", "));
    log::info!("classified {} baskets", table.get_cache_size());
    Ok(())
}
