//! Word transfer to and from byte streams.
//!
//! Words go over the wire as 8 bytes each in the configured [`WordOrder`].
//! The scratch buffer passed in is reused between calls to avoid
//! reallocation.

use super::WordOrder;
use std::io::{self, ErrorKind, Read, Write};
use wordpack_common::{WORD_BYTES, Word};

/// Writes all `words` to `out`. Returns the number of bytes written.
pub fn write_words<W: Write + ?Sized>(
    out: &mut W,
    words: &[Word],
    order: WordOrder,
    scratch: &mut Vec<u8>,
) -> io::Result<usize> {
    let len = words.len() * WORD_BYTES;
    scratch.clear();
    scratch.resize(len, 0);
    order.write_words(words, scratch);
    out.write_all(scratch)?;
    Ok(len)
}

/// Reads into `words` until it is full or `src` ends. Returns the number of
/// bytes read, which is less than 8 per word only when the source ended.
///
/// Words not fully read are left zero.
pub fn fill_words<R: Read + ?Sized>(
    src: &mut R,
    words: &mut [Word],
    order: WordOrder,
    scratch: &mut Vec<u8>,
) -> io::Result<usize> {
    let len = words.len() * WORD_BYTES;
    scratch.clear();
    scratch.resize(len, 0);

    let mut filled = 0;
    while filled < len {
        match src.read(&mut scratch[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    let whole = filled / WORD_BYTES * WORD_BYTES;
    order.read_words(&scratch[..whole], &mut words[..whole / WORD_BYTES]);
    words[whole / WORD_BYTES..].fill(0);
    Ok(filled)
}
