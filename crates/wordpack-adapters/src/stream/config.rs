//! Stream configuration.

use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use wordpack_common::{Element, WORD_BYTES, Word};

/// Byte order of words on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WordOrder {
    /// The host's byte order. Streams only port between hosts that agree.
    #[default]
    Native,
    /// Least significant byte first.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

impl WordOrder {
    /// Writes `words` into `bytes`, which must be exactly 8 bytes per word.
    pub fn write_words(self, words: &[Word], bytes: &mut [u8]) {
        debug_assert_eq!(bytes.len(), words.len() * WORD_BYTES);
        match self {
            Self::Native => NativeEndian::write_u64_into(words, bytes),
            Self::LittleEndian => LittleEndian::write_u64_into(words, bytes),
            Self::BigEndian => BigEndian::write_u64_into(words, bytes),
        }
    }

    /// Reads `words` from `bytes`, which must be exactly 8 bytes per word.
    pub fn read_words(self, bytes: &[u8], words: &mut [Word]) {
        debug_assert_eq!(bytes.len(), words.len() * WORD_BYTES);
        match self {
            Self::Native => NativeEndian::read_u64_into(bytes, words),
            Self::LittleEndian => LittleEndian::read_u64_into(bytes, words),
            Self::BigEndian => BigEndian::read_u64_into(bytes, words),
        }
    }
}

/// Configuration shared by [`Writer`](super::Writer) and
/// [`Reader`](super::Reader). Both sides of a stream must use equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig<T> {
    /// Value the first integer of the stream is delta encoded against. Pick
    /// something close to the first integer, or zero when unknown.
    pub delta_offset: T,
    /// Byte order of words on the wire.
    pub word_order: WordOrder,
}

impl<T: Element> Default for StreamConfig<T> {
    fn default() -> Self {
        Self {
            delta_offset: T::ZERO,
            word_order: WordOrder::Native,
        }
    }
}

impl<T: Element> StreamConfig<T> {
    /// Creates a configuration with the given delta offset.
    #[must_use]
    pub fn new(delta_offset: T) -> Self {
        Self {
            delta_offset,
            ..Self::default()
        }
    }

    /// Sets the delta offset.
    #[must_use]
    pub fn with_delta_offset(mut self, delta_offset: T) -> Self {
        self.delta_offset = delta_offset;
        self
    }

    /// Sets the byte order of words on the wire.
    #[must_use]
    pub fn with_word_order(mut self, word_order: WordOrder) -> Self {
        self.word_order = word_order;
        self
    }
}
