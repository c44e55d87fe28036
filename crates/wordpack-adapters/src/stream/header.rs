//! Page header word.
//!
//! | Bits | Full page | Terminal partial page |
//! |------|-----------|-----------------------|
//! | 0-6 | block 0 width (0-64) | block 0 width, or 127 when unused |
//! | 7-55 | widths of blocks 1-7 | same, or 127 when unused |
//! | 56-62 | block 8 width | raw tail count, low 7 bits |
//! | 63 | full-page flag, set | raw tail count, high bit |
//!
//! A page is the terminal partial page when the flag is clear and either the
//! reader is at slot 8 or the slot holds the sentinel.

use wordpack_common::{StreamError, Word};

/// Number of block slots in a page header.
pub const SLOTS_PER_PAGE: usize = 9;

/// Number of bits per slot.
pub const SLOT_BITS: u32 = 7;

/// Slot value marking "no block here". Unreachable by any real width.
pub const SENTINEL: u8 = 127;

/// Bit set on pages that carry all nine blocks.
pub const FULL_PAGE_FLAG: Word = 1 << 63;

const SLOT_MASK: Word = (1 << SLOT_BITS) - 1;

/// Bit position of the raw tail count on terminal partial pages.
const TAIL_SHIFT: u32 = 56;

/// Index of the slot that overlaps the raw tail count.
const LAST_SLOT: usize = SLOTS_PER_PAGE - 1;

/// A page header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PageHeader(Word);

impl PageHeader {
    /// Creates an empty header.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wraps a header word as read from a stream.
    #[must_use]
    pub const fn from_word(word: Word) -> Self {
        Self(word)
    }

    /// Returns the header word.
    #[must_use]
    pub const fn to_word(self) -> Word {
        self.0
    }

    /// Returns the 7-bit field at `slot`.
    #[must_use]
    pub fn slot(self, slot: usize) -> u8 {
        debug_assert!(slot < SLOTS_PER_PAGE);
        ((self.0 >> (slot as u32 * SLOT_BITS)) & SLOT_MASK) as u8
    }

    /// Records a block width in an empty slot.
    pub fn set_slot(&mut self, slot: usize, width: u8) {
        debug_assert!(slot < SLOTS_PER_PAGE);
        debug_assert!(width <= SENTINEL);
        self.0 |= Word::from(width) << (slot as u32 * SLOT_BITS);
    }

    /// Returns whether the full-page flag is set.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 & FULL_PAGE_FLAG != 0
    }

    /// Sets the full-page flag.
    pub fn mark_full(&mut self) {
        self.0 |= FULL_PAGE_FLAG;
    }

    /// Returns whether `slot` ends the stream segment, meaning the raw tail
    /// follows instead of a block.
    #[must_use]
    pub fn is_terminal_at(self, slot: usize) -> bool {
        !self.is_full() && (slot == LAST_SLOT || self.slot(slot) == SENTINEL)
    }

    /// Returns the raw tail count of a terminal partial page.
    #[must_use]
    pub const fn tail_len(self) -> usize {
        (self.0 >> TAIL_SHIFT) as usize
    }

    /// Seals a partial page: fills the slots from `first_unused` up to the
    /// last one with the sentinel and stores the raw tail count in the top
    /// eight bits.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::TailTooLong`] when `tail_len` exceeds 127. The
    /// count field is eight bits wide, but its high bit doubles as the
    /// full-page flag, so larger counts would not read back as a tail.
    pub fn seal_partial(
        &mut self,
        first_unused: usize,
        tail_len: usize,
    ) -> Result<(), StreamError> {
        let len = u8::try_from(tail_len)
            .ok()
            .filter(|&len| len <= SENTINEL)
            .ok_or(StreamError::TailTooLong { len: tail_len })?;
        debug_assert!(first_unused <= LAST_SLOT);
        debug_assert!(!self.is_full());

        for slot in first_unused..LAST_SLOT {
            self.set_slot(slot, SENTINEL);
        }
        self.0 |= Word::from(len) << TAIL_SHIFT;
        Ok(())
    }
}
