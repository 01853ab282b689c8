//! Low-level components dedicated to byte manipulation for UBX buffers.
//! UBX payloads are byte-aligned and little-endian throughout, so the
//! reader/writer pair works on whole bytes with a simple cursor.
use crate::error::{ByteReaderError, ByteWriterError};

/// Generic reader that extracts little-endian values from a `&[u8]`
/// without extra allocation or copies.
pub struct ByteReader<'a> {
    /// Shared source buffer (typically a received payload).
    buffer: &'a [u8],
    /// Current index expressed as number of bytes read from the beginning.
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of the provided buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Current cursor position in bytes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return a slice of `len` bytes from the current position.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], ByteReaderError> {
        let end = self.cursor + len;
        if end > self.buffer.len() {
            return Err(ByteReaderError::OutOfBounds {
                asked: len,
                available: self.remaining(),
            });
        }
        let slice = &self.buffer[self.cursor..end];
        self.cursor = end;
        Ok(slice)
    }

    /// Read the next byte.
    pub fn read_u8(&mut self) -> Result<u8, ByteReaderError> {
        self.read_slice(1).map(|slice| slice[0])
    }

    /// Read a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16, ByteReaderError> {
        self.read_slice(2)
            .map(|slice| u16::from_le_bytes([slice[0], slice[1]]))
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32, ByteReaderError> {
        self.read_slice(4)
            .map(|slice| u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
    }

    /// Read a two's-complement `i8`.
    pub fn read_i8(&mut self) -> Result<i8, ByteReaderError> {
        self.read_u8().map(|value| value as i8)
    }

    /// Read a little-endian two's-complement `i16`.
    pub fn read_i16(&mut self) -> Result<i16, ByteReaderError> {
        self.read_u16().map(|value| value as i16)
    }

    /// Read a little-endian two's-complement `i32`.
    pub fn read_i32(&mut self) -> Result<i32, ByteReaderError> {
        self.read_u32().map(|value| value as i32)
    }
}
//==================================================================================BYTEWRITER

/// Generic writer able to lay little-endian values into a `&mut [u8]`.
/// Used by the serialization engine to rebuild UBX payloads field by field.
pub struct ByteWriter<'a> {
    /// Target buffer (typically the payload under construction).
    buffer: &'a mut [u8],
    /// Current position expressed in bytes written.
    cursor: usize,
}

impl<'a> ByteWriter<'a> {
    /// Create a writer positioned at the start of the buffer.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Expose the cursor position in bytes (useful to derive final length).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Copy a byte slice into the buffer.
    pub fn write_slice(&mut self, slice: &[u8]) -> Result<(), ByteWriterError> {
        let end = self.cursor + slice.len();
        if end > self.buffer.len() {
            return Err(ByteWriterError::OutOfBounds {
                asked: slice.len(),
                available: self.buffer.len() - self.cursor,
            });
        }
        self.buffer[self.cursor..end].copy_from_slice(slice);
        self.cursor = end;
        Ok(())
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<(), ByteWriterError> {
        self.write_slice(&[value])
    }

    /// Write a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> Result<(), ByteWriterError> {
        self.write_slice(&value.to_le_bytes())
    }

    /// Write a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> Result<(), ByteWriterError> {
        self.write_slice(&value.to_le_bytes())
    }

    /// Write a two's-complement `i8`.
    pub fn write_i8(&mut self, value: i8) -> Result<(), ByteWriterError> {
        self.write_u8(value as u8)
    }

    /// Write a little-endian two's-complement `i16`.
    pub fn write_i16(&mut self, value: i16) -> Result<(), ByteWriterError> {
        self.write_u16(value as u16)
    }

    /// Write a little-endian two's-complement `i32`.
    pub fn write_i32(&mut self, value: i32) -> Result<(), ByteWriterError> {
        self.write_u32(value as u32)
    }

    /// Write `len` zero bytes (NUL padding for text slots).
    pub fn write_zeros(&mut self, len: usize) -> Result<(), ByteWriterError> {
        let end = self.cursor + len;
        if end > self.buffer.len() {
            return Err(ByteWriterError::OutOfBounds {
                asked: len,
                available: self.buffer.len() - self.cursor,
            });
        }
        self.buffer[self.cursor..end].fill(0);
        self.cursor = end;
        Ok(())
    }
}

//==================================================================================TEST_BYTEREADER
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
