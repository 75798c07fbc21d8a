///
/// @package tuser-refgen
///
/// @file Writer functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::{debug, trace};
use crate::error::RefgenError;
use crate::record::Record;

/// Line-oriented sink for [`Record`]s
///
/// Owns the underlying handle, which is released on drop.
pub(crate) struct RecordWriter<W: Write> {
    out: W,
    path: PathBuf,
    lines: usize,
}

impl RecordWriter<BufWriter<File>> {
    /// Create or truncate the destination file
    ///
    /// # Arguments
    ///
    /// * `path` - Destination of the reference data
    ///
    /// # Returns
    ///
    /// A `Result` with either `RecordWriter` on success or otherwise `RefgenError`
    pub(crate) fn create(path: &Path) -> Result<Self, RefgenError> {
        let file = File::create(path).map_err(|source| RefgenError::Io {
            path: path.into(),
            source,
        })?;

        debug!("Create: path={}", path.display());

        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> RecordWriter<W> {
    pub(crate) fn new(out: W, path: impl Into<PathBuf>) -> Self {
        Self {
            out,
            path: path.into(),
            lines: 0,
        }
    }

    /// Append one record as a line
    pub(crate) fn write(&mut self, record: &Record) -> Result<(), RefgenError> {
        let line = record.render()?;

        trace!("Write: {}", record);

        writeln!(self.out, "{line}").map_err(|source| self.io_error(source))?;

        self.lines += 1;

        Ok(())
    }

    /// Flush pending lines
    ///
    /// # Returns
    ///
    /// A `Result` with either the number of lines on success or otherwise `RefgenError`
    pub(crate) fn finish(mut self) -> Result<usize, RefgenError> {
        self.out.flush().map_err(|source| self.io_error(source))?;

        debug!("Finish: path={}, lines={}", self.path.display(), self.lines);

        Ok(self.lines)
    }

    fn io_error(&self, source: std::io::Error) -> RefgenError {
        RefgenError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
