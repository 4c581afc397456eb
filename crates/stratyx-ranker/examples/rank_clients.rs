//! Score and tier a client rankings CSV from the command line.
//!
//! Usage:
//! ```bash
//! cargo run --package stratyx-ranker --example rank_clients -- clients.csv [tiers]
//! ```

use std::path::Path;

use stratyx_ingestion::csv_source::load_clients_from_path;
use stratyx_ranker::scorer::score_and_tier;
use stratyx_ranker::summary::{status_breakdown, tier_label, tier_summaries};
use stratyx_ranker::weights::WeightVector;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "clients.csv".to_string());
    let tiers: usize = args.next().as_deref().unwrap_or("4").parse()?;

    let records = load_clients_from_path(Path::new(&path))?;
    let outcome = score_and_tier(&records, &WeightVector::default(), tiers)?;
    let tier_count = outcome
        .clients
        .iter()
        .filter_map(|c| c.tier)
        .max()
        .unwrap_or(1);

    println!("{:<5} {:<28} {:>7}  {}", "Rank", "Client", "Score", "Tier");
    for client in &outcome.clients {
        let tier = client.tier.unwrap_or(0);
        println!(
            "{:<5} {:<28} {:>7.2}  {}",
            client.rank,
            client.record.name,
            client.priority_score,
            tier_label(tier, tier_count)
        );
    }

    println!("\nTier summary:");
    for summary in tier_summaries(&outcome.clients) {
        println!(
            "  {:<22} {:>3} clients, scores {:.2}-{:.2}, mean {:.2}",
            summary.label, summary.count, summary.min_score, summary.max_score, summary.mean_score
        );
    }

    let breakdown = status_breakdown(&outcome.clients);
    if let Some(current) = breakdown.current {
        println!(
            "\nCurrent clients:     {} (mean score {:.2})",
            current.count, current.mean_score
        );
    }
    if let Some(non_current) = breakdown.non_current {
        println!(
            "Non-current clients: {} (mean score {:.2})",
            non_current.count, non_current.mean_score
        );
    }

    if !outcome.missing_fields.is_empty() {
        println!(
            "\n{} client(s) had blank factor cells scored as 0",
            outcome.missing_fields.len()
        );
    }

    Ok(())
}
