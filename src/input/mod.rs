//! Raw terminal input decoding.
//!
//! In raw mode the terminal hands over bytes, not key events. Each read
//! chunk is assumed to be one logical keypress and is looked up in a fixed
//! table of ANSI sequences and control bytes.

use crate::model::Key;
use std::collections::HashMap;
use std::io::{self, Read};

/// Ctrl+C as delivered in raw mode.
pub const INTERRUPT: u8 = 0x03;

/// Largest chunk read per keypress. Escape sequences for the keys we know
/// are at most three bytes long.
const CHUNK_SIZE: usize = 32;

/// Maps raw byte chunks to [`Key`]s.
#[derive(Debug, Clone)]
pub struct InputDecoder {
    table: HashMap<&'static [u8], Key>,
}

impl InputDecoder {
    /// Decode one chunk.
    ///
    /// Known sequences map through the table; a lone ASCII digit maps to
    /// [`Key::Digit`]; everything else is [`Key::Other`].
    pub fn decode(&self, chunk: &[u8]) -> Key {
        if let Some(key) = self.table.get(chunk) {
            return *key;
        }
        match chunk {
            [b] if b.is_ascii_digit() => Key::Digit(b - b'0'),
            _ => Key::Other,
        }
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        let mut table: HashMap<&'static [u8], Key> = HashMap::new();

        // Arrow keys, normal and application cursor mode
        table.insert(b"\x1b[A", Key::Up);
        table.insert(b"\x1bOA", Key::Up);
        table.insert(b"\x1b[B", Key::Down);
        table.insert(b"\x1bOB", Key::Down);
        table.insert(b"\x1b[C", Key::Right);
        table.insert(b"\x1bOC", Key::Right);
        table.insert(b"\x1b[D", Key::Left);
        table.insert(b"\x1bOD", Key::Left);

        // Control bytes
        table.insert(b"\x1b", Key::Escape);
        table.insert(b"\r", Key::Enter);
        table.insert(b"\n", Key::Enter);
        table.insert(b"\x7f", Key::Backspace);
        table.insert(b"\x08", Key::Backspace);
        table.insert(&[INTERRUPT], Key::Interrupt);

        table.insert(b"q", Key::Quit);

        Self { table }
    }
}

/// Reads raw chunks from a byte source and decodes them one at a time.
pub struct KeyReader<R> {
    source: R,
    decoder: InputDecoder,
    buf: [u8; CHUNK_SIZE],
}

impl<R: Read> KeyReader<R> {
    /// Wrap a byte source, usually raw-mode stdin.
    pub fn new(source: R) -> Self {
        Self {
            source,
            decoder: InputDecoder::default(),
            buf: [0; CHUNK_SIZE],
        }
    }

    /// Block until the next chunk arrives and decode it.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_key(&mut self) -> io::Result<Option<Key>> {
        loop {
            match self.source.read(&mut self.buf) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(self.decoder.decode(&self.buf[..n]))),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
