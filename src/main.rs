//! Steeple - static site builder for the Church Compliance Directory.

mod build;
mod compiler;
mod config;
mod logger;
mod theme;

use anyhow::Result;
use build::build_site;
use config::SiteConfig;

fn main() -> Result<()> {
    let config = SiteConfig::directory_site();
    config.validate()?;
    build_site(&config)?;
    Ok(())
}
