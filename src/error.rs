use thiserror::Error;

/// I/O errors that can occur while pulling bytes from the underlying source.
#[derive(Debug, Error)]
pub enum IoError {
    /// The source ended before the requested number of bytes was available
    #[error("Unexpected end of stream: requested {requested} bytes, {available} available")]
    UnexpectedEof { requested: usize, available: usize },

    /// Error from the underlying reader
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),
}

/// Errors that can occur while decoding the header block.
///
/// Any of these aborts the whole decode pass; there is no partial-success
/// state. Callers receive either a complete [`Header`](crate::Header) or one
/// of these.
#[derive(Debug, Error)]
pub enum FormatError {
    /// I/O error while reading the source
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Invalid magic number (first four bytes of the stream)
    #[error("Invalid magic number: expected 0x01312F76, got 0x{0:08X}")]
    BadMagic(u32),

    /// Attribute or channel name exceeds the format's length limit
    #[error("Name too long: exceeds {limit} bytes")]
    NameTooLong { limit: usize },

    /// Compression byte outside the 8-entry codec table
    #[error("Unknown compression: {0} (valid range 0-7)")]
    UnknownCompression(u8),

    /// Line-order byte outside the 3-entry table
    #[error("Unknown line order: {0} (valid range 0-2)")]
    UnknownLineOrder(u8),

    /// Pixel-type field of a channel record outside the 3-entry table
    #[error("Unknown pixel type: {0} (valid range 0-2)")]
    UnknownPixelType(i32),

    /// Declared payload size does not match the attribute type's wire size
    #[error("Size mismatch for '{type_tag}' attribute: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        type_tag: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Channel-list payload ended inside a channel record
    #[error("Truncated channel list: {reason}")]
    TruncatedChannelList { reason: &'static str },
}

/// Errors raised by header accessors for absent or mistyped attributes.
///
/// Unlike [`FormatError`] these are expected, recoverable outcomes: callers
/// probing for optional attributes handle them without invalidating the
/// header or any other query on it.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No attribute with the requested name
    #[error("No attribute named '{0}'")]
    MissingAttribute(String),

    /// Attribute exists but holds a different type than requested
    #[error("Attribute '{name}' has type '{actual}', expected '{expected}'")]
    WrongType {
        name: String,
        expected: &'static str,
        actual: String,
    },
}
