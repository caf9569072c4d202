use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use typedex_client::{CatalogConfig, Dex, Generation};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let yours = env::args().nth(1).unwrap_or_else(|| "charmander".to_string());
    let opponent = env::args().nth(2).unwrap_or_else(|| "squirtle".to_string());
    let generation: Generation = env::args()
        .nth(3)
        .unwrap_or_else(|| "latest".to_string())
        .parse()
        .context("Generation must be `latest` or 1-9")?;

    let dex = Dex::new(CatalogConfig::from_env());

    let (yours, opponent) = tokio::try_join!(
        dex.resolve_species(&yours),
        dex.resolve_species(&opponent),
    )?;

    for species in [&yours, &opponent] {
        let types = dex.types_at_generation(species, generation).await?;
        let names: Vec<&str> = types.iter().map(|t| t.value.name.as_str()).collect();
        println!("{} (#{}) in {}: [{}]", species.name, species.id, generation, names.join(", "));
    }

    let matchup = dex.compute_matchup(&yours, &opponent, generation).await?;
    if matchup.is_neutral() {
        println!("\nNeutral matchup");
        return Ok(());
    }

    println!("\nAttacking:");
    for (name, score) in &matchup.to {
        println!("  {:<10} {:+}", name, score);
    }
    println!("Defending:");
    for (name, score) in &matchup.from {
        println!("  {:<10} {:+}", name, score);
    }

    Ok(())
}
