///
/// @package tuser-refgen
///
/// @file Error types
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure is fatal to the run
#[derive(Debug, Error)]
pub(crate) enum RefgenError {
    /// Start value is missing, not a number or negative
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Destination cannot be created or written
    #[error("Cannot write `{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Value needs more bits than its fixed-width field has
    #[error("Value {value} does not fit into {width} bits")]
    FormatOverflow {
        value: String,
        width: usize,
    },
}
