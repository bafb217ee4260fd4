use anyhow::Result;
use clap::Parser;
use sp_index_manifest::inventory_index_set;
use std::path::PathBuf;
use tracing::info;

/// Where the deploy tooling expects the manifest to live.
const DEFAULT_OUTPUT_PATH: &str = "firestore.indexes.json";

#[derive(Debug, Parser)]
#[command(name = "generate-firestore-indexes", about = "Regenerates the Firestore composite index manifest")]
struct Args {
    /// Output path for the generated manifest.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let manifest = inventory_index_set().into_manifest();
    info!("Generated {} composite index definitions", manifest.indexes.len());

    manifest.write_pretty(&args.out)?;
    info!("Wrote {}", args.out.display());
    Ok(())
}
