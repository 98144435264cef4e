use bytes::Bytes;

use crate::error::IoError;

/// Trait for sequentially pulling bytes out of a header source.
///
/// This abstraction lets the header decoder work against anything that can
/// hand out bytes in order: a memory-mapped file, a network buffer, or a
/// plain [`std::io::Read`] stream. The decoder reads cursor-forward exactly
/// once per pass; implementations never need to support seeking.
pub trait ByteSource {
    /// Read exactly `len` bytes, advancing the cursor.
    ///
    /// Returns an error if fewer than `len` bytes remain or the underlying
    /// read fails. A zero-length read is valid and returns an empty buffer.
    fn read_exact(&mut self, len: usize) -> Result<Bytes, IoError>;
}

// =============================================================================
// SliceSource
// =============================================================================

/// A byte source over an in-memory buffer.
///
/// This is the common case: the caller has already mapped or slurped the file
/// and hands the decoder a slice. Reads are zero-copy views into the buffer.
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source reading from the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact(&mut self, len: usize) -> Result<Bytes, IoError> {
        let available = self.data.len() - self.pos;
        if len > available {
            return Err(IoError::UnexpectedEof {
                requested: len,
                available,
            });
        }
        let bytes = Bytes::copy_from_slice(&self.data[self.pos..self.pos + len]);
        self.pos += len;
        Ok(bytes)
    }
}

// =============================================================================
// StreamSource
// =============================================================================

/// A byte source adapting any [`std::io::Read`] implementation.
///
/// Suitable for reading a header straight off an open file without loading
/// the rest of the (potentially multi-gigabyte) image into memory.
pub struct StreamSource<R> {
    reader: R,
}

impl<R: std::io::Read> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consume the source, returning the underlying reader.
    ///
    /// After a successful decode the reader is positioned at the first byte
    /// past the header, where the scan-line offset table begins.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: std::io::Read> ByteSource for StreamSource<R> {
    fn read_exact(&mut self, len: usize) -> Result<Bytes, IoError> {
        let mut buf = vec![0u8; len];
        match self.reader.read_exact(&mut buf) {
            Ok(()) => Ok(Bytes::from(buf)),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Err(IoError::UnexpectedEof {
                    requested: len,
                    available: 0,
                })
            }
            Err(e) => Err(IoError::Read(e)),
        }
    }
}

// =============================================================================
// Endian Helper Functions
// =============================================================================
//
// The wire format is little-endian throughout, so only LE helpers exist.
// These are used extensively by the header decoder.

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian i32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_i32_le(bytes: &[u8]) -> i32 {
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian f32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_f32_le(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian f64 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 8 bytes.
#[inline]
pub fn read_f64_le(bytes: &[u8]) -> f64 {
    f64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}
