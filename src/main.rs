use clap::Parser;
use cribtally::cards::hand::Hand;
use cribtally::scoring::breakdown::Breakdown;
use cribtally::tally::histogram::Histogram;

/// Exhaustive scoring statistics for five-card cribbage show hands.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// log a progress line as each starter card's shard completes
    #[arg(short, long)]
    verbose: bool,
    /// score a single hand instead of enumerating the deck,
    /// e.g. "5H 5C 5D JS 5S" (starter last)
    #[arg(long)]
    hand: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cribtally::log();
    match args.hand {
        Some(ref cards) => {
            let hand = Hand::try_from(cards.as_str())?;
            println!("{}", hand);
            println!("{}", Breakdown::from(hand));
        }
        None => {
            print!("{}", Histogram::exhaust(args.verbose));
        }
    }
    Ok(())
}
