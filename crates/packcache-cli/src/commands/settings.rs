//! Settings file commands

use clap::{Args, Subcommand};
use packcache_store::FileSettingsStore;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,

    /// Settings file to operate on
    #[arg(long, global = true, default_value = "settings.toml")]
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print every setting with its effective value
    Show,
    /// Change one setting and save the file
    Set(SetArgs),
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Setting key, e.g. library_directory or full_screen_mode
    pub key: String,

    /// New value (true/false for flags)
    pub value: String,
}

pub fn execute(args: SettingsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileSettingsStore::open(&args.file)?;

    match args.command {
        SettingsCommand::Show => {
            for (key, value) in store.entries() {
                println!("{} = {}", key, value);
            }
        }
        SettingsCommand::Set(set) => {
            store.set_from_str(&set.key, &set.value)?;
            store.save()?;
            println!("Saved {} = {} to {}", set.key, set.value, store.file_path().display());
        }
    }

    Ok(())
}
