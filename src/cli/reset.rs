//! Reset command implementation

use crate::cache::{FileCache, PairCache};
use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Print the removed cache file
    #[arg(short, long)]
    pub verbose: bool,
}

impl ResetArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        // the file is removed even when caching is disabled
        let cache = FileCache::new(config.cache.resolved_dir());
        cache.clear()?;

        if self.verbose {
            println!("Removed cache file {}", cache.path().display());
        }
        Ok(())
    }
}
