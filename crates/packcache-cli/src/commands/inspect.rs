//! State file inspection command

use clap::Args;
use packcache_store::read_state_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// State file to read
    #[arg(default_value = packcache_store::DEFAULT_STATE_FILE)]
    pub path: PathBuf,

    /// Print the verified document as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = read_state_file(&args.path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("State file: {}", args.path.display());
    println!("  format_version: {}", state.format_version);
    println!("  saved_at: {}", state.saved_at.to_rfc3339());
    println!("  content_digest: {}", state.content_digest);
    println!("  selections: {}", state.selections.len());
    println!("  collections: {}", state.collections.len());
    println!("  distinct variants: {}", state.referenced_variant_count());

    for (title_key, variants) in &state.collections {
        let selected = state
            .selections
            .get(title_key)
            .map(|pack| pack.id.as_str())
            .unwrap_or("-");
        println!(
            "{}: selected={} variants=[{}]",
            title_key,
            selected,
            variants
                .iter()
                .map(|pack| pack.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    // Selections whose collection was never populated
    for (title_key, pack) in &state.selections {
        if !state.collections.contains_key(title_key) {
            println!("{}: selected={} variants=(not populated)", title_key, pack.id);
        }
    }

    Ok(())
}
