///
/// @package tuser-refgen
///
/// @file Refgen functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use log::debug;
use stdext::function_name;
use crate::config::Config;
use crate::counter::{self, Countdown};
use crate::error::RefgenError;
use crate::record::Record;
use crate::writer::RecordWriter;

/// Generate the reference file in one pass
///
/// The start value is validated before the destination is touched.
///
/// # Arguments
///
/// * `config` - Config values read from args
///
/// # Returns
///
/// A `Result` with either the number of written lines on success or otherwise `RefgenError`
pub(crate) fn run(config: &Config) -> Result<usize, RefgenError> {
    debug!("{}", function_name!());

    let start = counter::parse_start(&config.start)?;
    let mut writer = RecordWriter::create(&config.output)?;

    for value in Countdown::new(start) {
        writer.write(&Record::new(value))?;
    }

    writer.finish()
}
