//! Stream writer.

use super::header::{PageHeader, SLOTS_PER_PAGE};
use super::{PAGE_SIZE, StreamConfig, word_io};
use std::io::Write;
use wordpack_common::{BATCH_LEN, Batch, Element, Result, StreamError, Word};
use wordpack_core::pack::append_delta_encode;

/// Encodes integers to a byte sink, one page of up to nine batches at a time.
///
/// Batches accumulate until a page is full. Call [`flush`](Writer::flush)
/// to emit whatever is pending; data not flushed is lost when the writer is
/// dropped.
///
/// Errors only come from the sink. After an error the writer refuses further
/// use with [`StreamError::Poisoned`].
///
/// # Example
///
/// ```
/// use wordpack_adapters::Writer;
///
/// let mut writer = Writer::new(Vec::new(), 0u64);
/// writer.flush(&[1, 2, 3]).unwrap();
///
/// let out = writer.into_inner();
///
/// // header plus three raw words
/// assert_eq!(out.len(), 4 * 8);
/// ```
pub struct Writer<W: Write, T: Element> {
    out: W,
    config: StreamConfig<T>,
    /// Delta offset for the next batch.
    last_value: T,
    header: PageHeader,
    /// Next free header slot.
    slot: usize,
    /// Pending page, with index 0 reserved for the header.
    buf: Vec<Word>,
    scratch: Vec<u8>,
    pages_written: u64,
    bytes_written: u64,
    poisoned: bool,
}

impl<W: Write, T: Element> Writer<W, T> {
    /// Begins a stream with the given delta offset. Readers of the stream
    /// must use the same value.
    pub fn new(out: W, delta_offset: T) -> Self {
        Self::with_config(out, StreamConfig::new(delta_offset))
    }

    /// Begins a stream with the given configuration.
    pub fn with_config(out: W, config: StreamConfig<T>) -> Self {
        let mut buf = Vec::with_capacity(PAGE_SIZE + 1);
        buf.push(0);
        Self {
            out,
            last_value: config.delta_offset,
            config,
            header: PageHeader::new(),
            slot: 0,
            buf,
            scratch: Vec::new(),
            pages_written: 0,
            bytes_written: 0,
            poisoned: false,
        }
    }

    /// Adds 64 integers to the stream. A page is written to the sink once
    /// nine batches are pending.
    pub fn write_batch(&mut self, batch: &Batch<T>) -> Result<()> {
        self.check_usable()?;

        let width = append_delta_encode(&mut self.buf, batch, self.last_value);
        self.last_value = batch[BATCH_LEN - 1];
        self.header.set_slot(self.slot, width as u8);
        self.slot += 1;

        if self.slot < SLOTS_PER_PAGE {
            return Ok(());
        }
        self.header.mark_full();
        self.emit_page()
    }

    /// Writes all pending data, including `rest`, to the sink and flushes it.
    ///
    /// Whole batches are taken from `rest` first. Fewer than 64 remaining
    /// integers are written uncompressed on a terminal partial page, so
    /// compression is best when the number of integers written between
    /// flushes is a multiple of [`PAGE_SIZE`]. Nothing is written when no
    /// data is pending.
    ///
    /// Writing may continue after a flush.
    pub fn flush(&mut self, rest: &[T]) -> Result<()> {
        self.check_usable()?;

        let (batches, tail) = rest.as_chunks::<BATCH_LEN>();
        for batch in batches {
            self.write_batch(batch)?;
        }

        if self.slot != 0 || !tail.is_empty() {
            self.seal_tail(tail)?;
            tracing::debug!(
                blocks = self.slot,
                tail = tail.len(),
                "writing terminal partial page"
            );
            self.emit_page()?;
        }

        self.out.flush().map_err(|e| {
            self.poisoned = true;
            e.into()
        })
    }

    /// Returns a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Returns the underlying sink. Pending data is discarded.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &StreamConfig<T> {
        &self.config
    }

    /// Returns the number of pages written to the sink.
    #[must_use]
    pub fn pages_written(&self) -> u64 {
        self.pages_written
    }

    /// Returns the number of bytes written to the sink.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Returns the number of batches waiting for the page to fill.
    #[must_use]
    pub fn pending_batches(&self) -> usize {
        self.slot
    }

    fn check_usable(&self) -> Result<()> {
        if self.poisoned {
            return Err(StreamError::Poisoned.into());
        }
        Ok(())
    }

    /// Marks the pending page as terminal and buffers `tail` as raw words.
    /// Nothing changes when the header cannot hold the tail count.
    fn seal_tail(&mut self, tail: &[T]) -> Result<()> {
        self.header.seal_partial(self.slot, tail.len())?;
        self.buf.extend(tail.iter().map(|v| v.to_raw_word()));
        Ok(())
    }

    /// Writes the header and buffered words, then starts a new page.
    fn emit_page(&mut self) -> Result<()> {
        self.buf[0] = self.header.to_word();
        let n = word_io::write_words(
            &mut self.out,
            &self.buf,
            self.config.word_order,
            &mut self.scratch,
        )
        .map_err(|e| {
            self.poisoned = true;
            e
        })?;

        tracing::trace!(
            blocks = self.slot,
            words = self.buf.len(),
            full = self.header.is_full(),
            "page written"
        );
        self.pages_written += 1;
        self.bytes_written += n as u64;

        self.header = PageHeader::new();
        self.slot = 0;
        self.buf.truncate(1);
        Ok(())
    }
}
