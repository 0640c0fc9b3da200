//! Cache command implementation.
//!
//! Provides `harvester cache show`, `harvester cache lookup` and
//! `harvester cache clear`.

use clap::{Args, Subcommand};

use crate::cache::ContentCache;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// Show the index location and entry count.
    Show,
    /// Print the fingerprint recorded for a URL.
    Lookup {
        /// URL as written in the task file.
        url: String,
    },
    /// Forget every recorded fingerprint.
    Clear {
        /// Don't prompt for confirmation.
        #[arg(short, long)]
        force: bool,
    },
}

/// The cache command implementation.
pub struct CacheCommand {
    context: CommandContext,
    args: CacheArgs,
}

impl CacheCommand {
    /// Create a new cache command.
    pub fn new(context: CommandContext, args: CacheArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cache_dir = self.context.cache_dir_for(&self.context.base_dir());
        if !cache_dir.is_dir() {
            match &self.args.command {
                CacheSubcommand::Clear { .. } => ui.message("Cache is already empty"),
                _ => ui.message(&format!("No cache at {}", cache_dir.display())),
            }
            return Ok(CommandResult::success());
        }

        let mut cache = ContentCache::open(cache_dir)?;

        match &self.args.command {
            CacheSubcommand::Show => show_cache(&cache, ui),
            CacheSubcommand::Lookup { url } => lookup(&cache, url, ui),
            CacheSubcommand::Clear { force } => clear_cache(&mut cache, *force, ui)?,
        }

        Ok(CommandResult::success())
    }
}

fn show_cache(cache: &ContentCache, ui: &mut dyn UserInterface) {
    ui.message(&format!("Index: {}", cache.index_path().display()));
    ui.message(&format!("Entries: {}", cache.len()));
}

fn lookup(cache: &ContentCache, url: &str, ui: &mut dyn UserInterface) {
    let fingerprint = cache.fingerprint_for_url(url);
    if fingerprint.is_empty() {
        ui.message(&format!("No fingerprint recorded for {}", url));
    } else {
        ui.message(&fingerprint);
    }
}

fn clear_cache(cache: &mut ContentCache, force: bool, ui: &mut dyn UserInterface) -> Result<()> {
    if cache.is_empty() {
        ui.message("Cache is already empty");
        return Ok(());
    }

    let count = cache.len();
    if !force
        && ui.is_interactive()
        && !ui.confirm(&format!("Clear {} cached fingerprints?", count), false)?
    {
        ui.message("Cancelled");
        return Ok(());
    }

    cache.clear()?;
    ui.success(&format!("Cleared {} entries", count));
    Ok(())
}
