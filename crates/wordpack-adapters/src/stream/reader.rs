//! Stream reader.

use super::header::{PageHeader, SLOTS_PER_PAGE};
use super::{StreamConfig, word_io};
use std::io::Read;
use wordpack_common::{
    BATCH_LEN, CodecError, Element, Result, StreamError, WORD_BITS, WORD_BYTES, Word,
};
use wordpack_core::pack::append_delta_decode;

/// Decodes integers from a byte source written by [`Writer`](super::Writer).
///
/// Each call to [`read_append`](Reader::read_append) yields at most one
/// batch, or the raw tail of a terminal partial page.
///
/// # Example
///
/// ```
/// use wordpack_adapters::{Reader, Writer};
///
/// let data: Vec<i32> = (0..100).map(|i| i * 3).collect();
///
/// let mut buf = Vec::new();
/// Writer::new(&mut buf, 0).flush(&data)?;
///
/// let mut got = Vec::new();
/// Reader::new(buf.as_slice(), 0).read_to_end(&mut got)?;
/// assert_eq!(got, data);
/// # Ok::<(), wordpack_common::Error>(())
/// ```
pub struct Reader<R: Read, T: Element> {
    src: R,
    config: StreamConfig<T>,
    /// Delta offset for the next batch.
    last_value: T,
    header: PageHeader,
    /// Next header slot to read; `SLOTS_PER_PAGE` when a new header is due.
    slot: usize,
    /// Words of the current block or raw tail, reused between calls.
    words: Vec<Word>,
    scratch: Vec<u8>,
}

impl<R: Read, T: Element> Reader<R, T> {
    /// Begins reading a stream with the delta offset its writer used.
    pub fn new(src: R, delta_offset: T) -> Self {
        Self::with_config(src, StreamConfig::new(delta_offset))
    }

    /// Begins reading a stream with the configuration its writer used.
    pub fn with_config(src: R, config: StreamConfig<T>) -> Self {
        Self {
            src,
            last_value: config.delta_offset,
            config,
            header: PageHeader::new(),
            slot: SLOTS_PER_PAGE,
            words: Vec::with_capacity(BATCH_LEN),
            scratch: Vec::new(),
        }
    }

    /// Appends the next batch, or the raw tail of a partial page, to `dst`.
    ///
    /// Returns the number of integers appended, or `None` when the source
    /// ended cleanly at a page boundary. A raw tail may hold zero integers.
    ///
    /// # Errors
    ///
    /// - [`StreamError::Truncated`] when the source ends inside a header or
    ///   a declared block
    /// - [`CodecError::InvalidWidth`] when a header slot holds no valid width
    /// - [`Error::Io`](wordpack_common::Error::Io) from the source
    ///
    /// On error `dst` is left as it was.
    pub fn read_append(&mut self, dst: &mut Vec<T>) -> Result<Option<usize>> {
        if self.slot >= SLOTS_PER_PAGE && !self.next_header()? {
            return Ok(None);
        }

        if self.header.is_terminal_at(self.slot) {
            let len = self.header.tail_len();
            self.fill(len)?;
            dst.extend(self.words.iter().map(|&w| T::from_raw_word(w)));

            tracing::debug!(blocks = self.slot, tail = len, "read terminal partial page");
            self.slot = SLOTS_PER_PAGE;
            return Ok(Some(len));
        }

        let width = usize::from(self.header.slot(self.slot));
        if width > WORD_BITS as usize {
            return Err(CodecError::InvalidWidth { width }.into());
        }
        self.fill(width)?;
        append_delta_decode(dst, &self.words, self.last_value)?;
        if let Some(&last) = dst.last() {
            self.last_value = last;
        }
        self.slot += 1;
        Ok(Some(BATCH_LEN))
    }

    /// Reads all remaining integers into `dst`. Returns the number appended.
    pub fn read_to_end(&mut self, dst: &mut Vec<T>) -> Result<usize> {
        let mut total = 0;
        while let Some(n) = self.read_append(dst)? {
            total += n;
        }
        Ok(total)
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.src
    }

    /// Returns the underlying source.
    pub fn into_inner(self) -> R {
        self.src
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &StreamConfig<T> {
        &self.config
    }

    /// Loads the next page header. Returns false on a clean end of stream.
    fn next_header(&mut self) -> Result<bool> {
        let mut word = [0];
        let n = word_io::fill_words(
            &mut self.src,
            &mut word,
            self.config.word_order,
            &mut self.scratch,
        )?;
        match n {
            0 => return Ok(false),
            WORD_BYTES => {}
            available => return Err(truncated(WORD_BYTES, available)),
        }

        self.header = PageHeader::from_word(word[0]);
        self.slot = 0;
        tracing::trace!(header = word[0], "page header");
        Ok(true)
    }

    /// Reads exactly `len` words into the block buffer.
    fn fill(&mut self, len: usize) -> Result<()> {
        self.words.clear();
        self.words.resize(len, 0);
        let n = word_io::fill_words(
            &mut self.src,
            &mut self.words,
            self.config.word_order,
            &mut self.scratch,
        )?;
        if n < len * WORD_BYTES {
            return Err(truncated(len * WORD_BYTES, n));
        }
        Ok(())
    }
}

fn truncated(expected: usize, available: usize) -> wordpack_common::Error {
    tracing::warn!(expected, available, "stream ended mid-record");
    StreamError::Truncated {
        expected,
        available,
    }
    .into()
}
