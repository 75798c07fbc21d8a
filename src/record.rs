///
/// @package tuser-refgen
///
/// @file Record functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use crate::counter::CountValue;
use crate::error::RefgenError;
use crate::tag::Tag;

/// Binary digits of the tag field
pub(crate) const TAG_WIDTH: usize = 5;
/// Binary digits of the value field
pub(crate) const VALUE_WIDTH: usize = 32;
/// Characters per line without terminator
pub(crate) const LINE_LEN: usize = TAG_WIDTH + VALUE_WIDTH;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub(crate) tag: Tag,
    pub(crate) value: CountValue,
}

impl Record {
    pub(crate) fn new(value: CountValue) -> Self {
        Self {
            tag: Tag::classify(value),
            value,
        }
    }

    /// Render record as fixed-width binary text
    ///
    /// # Returns
    ///
    /// A `Result` with either the line without terminator on success or otherwise `RefgenError`
    pub(crate) fn render(&self) -> Result<String, RefgenError> {
        if 0 != (self.value >> VALUE_WIDTH) {
            return Err(RefgenError::FormatOverflow {
                value: self.value.to_string(),
                width: VALUE_WIDTH,
            });
        }

        let line = format!("{:0tw$b}{:0vw$b}", self.tag.bits(), self.value,
            tw = TAG_WIDTH, vw = VALUE_WIDTH);

        debug_assert_eq!(LINE_LEN, line.len());

        Ok(line)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(tag={}, value={})", self.tag, self.value)
    }
}
