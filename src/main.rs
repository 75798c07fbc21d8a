///
/// @package tuser-refgen
///
/// @file Main functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

mod config;
mod counter;
mod error;
mod logger;
mod record;
mod refgen;
mod tag;
mod writer;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use crate::config::Config;

fn print_version() {
    info!("{} {} - Copyright (c) 2025-present {}",
        env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"));
    info!("Released under the GNU Public License");
}

fn main() -> Result<()> {
    let config = Config::parse();

    logger::init(&config)?;

    debug!("Config: {:?}", config);

    print_version();

    let lines = refgen::run(&config)
        .with_context(|| format!("Failed to generate `{}'", config.output.display()))?;

    info!("Wrote {} records to `{}'", lines, config.output.display());
    info!("Exit");

    Ok(())
}
