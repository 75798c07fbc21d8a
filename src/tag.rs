///
/// @package tuser-refgen
///
/// @file Tag functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use bitflags::bitflags;
use crate::counter::CountValue;

bitflags! {
    /// Status bits attached to a [`CountValue`]
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
    pub(crate) struct Tag: u8 {
        /// Low nibble is 0xF
        const LOW_NIBBLE = 1 << 0;
        /// Nibble sum masked to 5 bits is 5
        const NIBBLE_SUM = 1 << 1;
        /// Tripled value shifted right by 3 is 7
        const TRIPLE = 1 << 2;
        /// Low 7 bits are 0xA
        const LOW_SEVEN = 1 << 3;
        /// Bits 0-3 are all set
        const ALL_SET = 1 << 4;
    }
}

const PARTIAL_MASK: u8 = 0xF;

impl Tag {
    /// Classify a value against all predicates
    ///
    /// # Arguments
    ///
    /// * `x` - Value to classify
    ///
    /// # Returns
    ///
    /// The composite `Tag`, always within `0..=31`
    pub(crate) fn classify(x: CountValue) -> Self {
        let mut tag = Self::empty();

        tag.set(Self::LOW_NIBBLE, 0xF == (x & 0xF));
        tag.set(Self::NIBBLE_SUM, 0x5 == (nibble_sum(x) & 0x1F));
        tag.set(Self::TRIPLE, x.checked_mul(3).is_some_and(|t| 0x7 == (t >> 3)));
        tag.set(Self::LOW_SEVEN, 0xA == (x & 0x7F));

        tag.settle()
    }

    /// Add bit 4 when the partial tag of bits 0-3 equals 0xF
    pub(crate) fn settle(mut self) -> Self {
        // Must run after bits 0-3 are accumulated
        if PARTIAL_MASK == self.bits() {
            self.insert(Self::ALL_SET);
        }

        self
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07b}", self.bits())
    }
}

/// Sum of all 4-bit groups of a value
pub(crate) fn nibble_sum(x: CountValue) -> CountValue {
    let mut rest = x;
    let mut sum = 0;

    while 0 != rest {
        sum += rest & 0xF;
        rest >>= 4;
    }

    sum
}
