//! Header block decoding.
//!
//! The header is the foundation of the container: everything else in the
//! file (offset tables, tile data) is located and interpreted through it.
//!
//! # Header Structure
//!
//! ```text
//! Bytes 0-3: Magic number, 0x01312F76 little-endian
//! Bytes 4-7: Version field, little-endian (retained, not interpreted here)
//! Then, repeated:
//!   attribute name   null-terminated string; empty name ends the header
//!   type tag         null-terminated string
//!   size             u32 little-endian payload length
//!   payload          `size` bytes, decoded per the type-tag table
//! ```
//!
//! Decoding is a single forward pass over the source: MAGIC → VERSION →
//! attribute loop → done. Any format or I/O error aborts the whole pass;
//! no partially-filled header ever escapes.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::channel::ChannelList;
use crate::error::{FormatError, LookupError};
use crate::io::{read_u32_le, ByteSource};

use super::values::AttrValue;

// =============================================================================
// Constants
// =============================================================================

/// Magic number identifying the container format.
pub const MAGIC: u32 = 0x01312F76;

/// Maximum length of an attribute name or type tag in bytes.
///
/// The format caps names at 255 bytes; enforcing the cap also stops the
/// string reader from consuming unbounded garbage when handed a stream that
/// is not a header at all.
pub const MAX_NAME_LEN: usize = 255;

/// Name under which the channel list attribute is stored.
const CHANNELS_ATTR: &str = "channels";

// =============================================================================
// Header
// =============================================================================

/// A decoded header: an immutable mapping from attribute name to value.
///
/// Built exactly once by [`Header::read`] and read-only afterwards, so a
/// completed header can be shared freely across threads.
///
/// # Duplicate Attribute Names
///
/// Duplicate names within one header are resolved last-write-wins: the
/// record appearing later in the stream replaces the earlier one. Files
/// produced by conforming writers never contain duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    version: u32,
    attributes: BTreeMap<String, AttrValue>,
}

/// Read a null-terminated string from the source, capped at
/// [`MAX_NAME_LEN`] bytes.
fn read_cstring<S: ByteSource>(source: &mut S) -> Result<String, FormatError> {
    let mut buf = Vec::new();
    loop {
        let byte = source.read_exact(1)?[0];
        if byte == 0 {
            return Ok(String::from_utf8_lossy(&buf).into_owned());
        }
        if buf.len() == MAX_NAME_LEN {
            return Err(FormatError::NameTooLong {
                limit: MAX_NAME_LEN,
            });
        }
        buf.push(byte);
    }
}

impl Header {
    /// Decode a header from a byte source.
    ///
    /// Reads the source sequentially exactly once, stopping at the empty
    /// attribute name that terminates the header. On return the source is
    /// positioned at the first byte past the header.
    ///
    /// # Errors
    /// - [`FormatError::BadMagic`] if the stream does not start with the
    ///   magic number
    /// - [`FormatError::Io`] on a short read anywhere in the pass
    /// - any other [`FormatError`] raised by the per-tag decode table
    pub fn read<S: ByteSource>(source: &mut S) -> Result<Self, FormatError> {
        let magic = read_u32_le(&source.read_exact(4)?);
        if magic != MAGIC {
            return Err(FormatError::BadMagic(magic));
        }
        let version = read_u32_le(&source.read_exact(4)?);

        let mut attributes = BTreeMap::new();
        loop {
            let name = read_cstring(source)?;
            if name.is_empty() {
                break;
            }
            let type_tag = read_cstring(source)?;
            let size = read_u32_le(&source.read_exact(4)?) as usize;
            let payload = source.read_exact(size)?;

            let value = AttrValue::decode(&type_tag, payload)?;
            trace!(name = %name, type_tag = %type_tag, size, "decoded attribute");

            // Last-write-wins on duplicate names.
            attributes.insert(name, value);
        }

        debug!(
            version,
            attributes = attributes.len(),
            "decoded header block"
        );
        Ok(Self {
            version,
            attributes,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The attribute value stored under `name`.
    pub fn attribute(&self, name: &str) -> Result<&AttrValue, LookupError> {
        self.attributes
            .get(name)
            .ok_or_else(|| LookupError::MissingAttribute(name.to_string()))
    }

    /// The type tag and value stored under `name`.
    pub fn attribute_info(&self, name: &str) -> Result<(&str, &AttrValue), LookupError> {
        let value = self.attribute(name)?;
        Ok((value.type_tag(), value))
    }

    /// Names of all stored attributes, in sorted order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// The channel list, i.e. the `channels` attribute as a [`ChannelList`].
    ///
    /// # Errors
    /// - [`LookupError::MissingAttribute`] if the header has no `channels`
    ///   attribute
    /// - [`LookupError::WrongType`] if the stored value is not a `chlist`
    pub fn channels(&self) -> Result<&ChannelList, LookupError> {
        let value = self.attribute(CHANNELS_ATTR)?;
        value.as_channels().ok_or_else(|| LookupError::WrongType {
            name: CHANNELS_ATTR.to_string(),
            expected: "chlist",
            actual: value.type_tag().to_string(),
        })
    }

    /// The version field from the start of the stream.
    ///
    /// Retained verbatim; this component does not interpret its flag bits.
    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of stored attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the header stores no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
