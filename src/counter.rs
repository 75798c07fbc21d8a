///
/// @package tuser-refgen
///
/// @file Counter functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::iter::FusedIterator;
use std::num::IntErrorKind;
use log::debug;
use crate::error::RefgenError;
use crate::record::VALUE_WIDTH;

pub(crate) type CountValue = u64;

/// Descending sequence from `start` down to and including zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Countdown {
    next: Option<CountValue>,
}

impl Countdown {
    pub(crate) fn new(start: CountValue) -> Self {
        debug!("New: start={}", start);

        Self {
            next: Some(start),
        }
    }
}

impl Iterator for Countdown {
    type Item = CountValue;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = current.checked_sub(1);

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(current) => match usize::try_from(current).ok().and_then(|n| n.checked_add(1)) {
                Some(len) => (len, Some(len)),
                None => (usize::MAX, None),
            },
        }
    }
}

impl FusedIterator for Countdown {}

/// Parse the start argument
///
/// # Arguments
///
/// * `arg` - Decimal text as passed on the command line
///
/// # Returns
///
/// A `Result` with either the start value on success or otherwise `RefgenError`
pub(crate) fn parse_start(arg: &str) -> Result<CountValue, RefgenError> {
    let trimmed = arg.trim();

    let negative = trimmed.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));

    if negative {
        return Err(RefgenError::InvalidArgument(
            format!("Start must not be negative: `{trimmed}'")));
    }

    let start = trimmed.parse::<CountValue>().map_err(|e| match e.kind() {
        IntErrorKind::Empty => RefgenError::InvalidArgument("Start value is missing".into()),
        IntErrorKind::PosOverflow => RefgenError::FormatOverflow {
            value: trimmed.into(),
            width: VALUE_WIDTH,
        },
        _ => RefgenError::InvalidArgument(format!("Start is not a number: `{trimmed}'")),
    })?;

    if start > CountValue::from(u32::MAX) {
        return Err(RefgenError::FormatOverflow {
            value: start.to_string(),
            width: VALUE_WIDTH,
        });
    }

    Ok(start)
}
