///
/// @package tuser-refgen
///
/// @file Config functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Config {
    /// Count down from START to zero
    #[arg(allow_negative_numbers = true)]
    pub(crate) start: String,

    /// Write reference data to OUTPUT
    pub(crate) output: PathBuf,

    /// Set logging level LEVEL
    #[arg(short = 'l', long = "level", value_name = "LEVEL", default_value = "")]
    pub(crate) loglevel: String,

    /// Print debugging messages
    #[arg(short = 'D', long)]
    pub(crate) debug: bool,
}
