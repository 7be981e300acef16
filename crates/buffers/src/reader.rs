//! Binary buffer reader with cursor tracking.

use std::str;

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position and provides checked methods for
/// reading integer types and strings. Reading past the end of the slice
/// yields [`BufferError::EndOfBuffer`] rather than panicking, so a truncated
/// transfer surfaces as an error the caller can reject.
///
/// # Example
///
/// ```
/// use campus_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16().unwrap(), 0x0203);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub buf: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(buf: &'a [u8]) -> Self {
        let end = buf.len();
        Self { buf, x: 0, end }
    }

    /// Creates a reader from a slice with custom start and end positions.
    pub fn from_slice(buf: &'a [u8], x: usize, end: usize) -> Self {
        Self { buf, x, end }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, buf: &'a [u8]) {
        self.x = 0;
        self.end = buf.len();
        self.buf = buf;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    fn assert_size(&self, n: usize) -> Result<(), BufferError> {
        if self.x + n > self.end {
            return Err(BufferError::EndOfBuffer);
        }
        Ok(())
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.assert_size(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.assert_size(size)?;
        let x = self.x;
        let end = x + size;
        self.x = end;
        Ok(&self.buf[x..end])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.assert_size(1)?;
        let val = self.buf[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.u8()? as i8)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        self.assert_size(2)?;
        let val = u16::from_be_bytes([self.buf[self.x], self.buf[self.x + 1]]);
        self.x += 2;
        Ok(val)
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        self.assert_size(4)?;
        let val = u32::from_be_bytes([
            self.buf[self.x],
            self.buf[self.x + 1],
            self.buf[self.x + 2],
            self.buf[self.x + 3],
        ]);
        self.x += 4;
        Ok(val)
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        Ok(self.u32()? as i32)
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self) -> Result<u64, BufferError> {
        self.assert_size(8)?;
        let val = u64::from_be_bytes([
            self.buf[self.x],
            self.buf[self.x + 1],
            self.buf[self.x + 2],
            self.buf[self.x + 3],
            self.buf[self.x + 4],
            self.buf[self.x + 5],
            self.buf[self.x + 6],
            self.buf[self.x + 7],
        ]);
        self.x += 8;
        Ok(val)
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        Ok(self.u64()? as i64)
    }

    /// Reads a UTF-8 string of the given byte length.
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        let bytes = self.buf(size)?;
        str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8().unwrap(), 0x01);
        assert_eq!(reader.u8().unwrap(), 0x02);
        assert_eq!(reader.u8().unwrap(), 0x03);
        assert_eq!(reader.u8(), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_u16() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u16().unwrap(), 0x0102);
        assert_eq!(reader.u16().unwrap(), 0x0304);
    }

    #[test]
    fn test_u32_u64() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32().unwrap(), 0x01020304);
        assert_eq!(reader.u32().unwrap(), 0x05060708);
        reader.reset(&data);
        assert_eq!(reader.u64().unwrap(), 0x0102030405060708);
    }

    #[test]
    fn test_signed() {
        let data = (-5i64).to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.i64().unwrap(), -5);
        let data = (-5i32).to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.i32().unwrap(), -5);
    }

    #[test]
    fn test_skip() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        reader.skip(2).unwrap();
        assert_eq!(reader.u8().unwrap(), 0x03);
        assert_eq!(reader.skip(2), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_utf8() {
        let data = b"hello world";
        let mut reader = Reader::new(data);
        assert_eq!(reader.utf8(5).unwrap(), "hello");
        assert_eq!(reader.utf8(6).unwrap(), " world");
        assert_eq!(reader.utf8(1), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_utf8_invalid() {
        let data = [0xff, 0xfe];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.utf8(2), Err(BufferError::InvalidUtf8));
    }

    #[test]
    fn test_truncated_multibyte() {
        let data = [0x01, 0x02];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32(), Err(BufferError::EndOfBuffer));
        // A failed read leaves the cursor untouched.
        assert_eq!(reader.u16().unwrap(), 0x0102);
    }
}
