//! Attribute value types and the per-type-tag decode table.
//!
//! Every attribute record carries a type tag string that selects how its
//! payload is decoded. The tag vocabulary is closed: recognized tags map to
//! dedicated [`AttrValue`] variants, anything else lands in the
//! [`Opaque`](AttrValue::Opaque) fallback with its raw bytes preserved.
//! Unknown tags are not an error; they are simply carried through undecoded.

use bytes::Bytes;

use crate::channel::ChannelList;
use crate::error::FormatError;
use crate::io::{read_f32_le, read_f64_le, read_i32_le};

// =============================================================================
// Compression
// =============================================================================

/// Compression codec identifiers.
///
/// This component only names the codecs; it never decompresses anything.
/// Stored on the wire as a single byte indexing the eight-entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Compression {
    /// No compression
    None = 0,

    /// Run-length encoding
    Rle = 1,

    /// zlib, one scan line at a time
    Zips = 2,

    /// zlib, blocks of 16 scan lines
    Zip = 3,

    /// Piz wavelet compression
    Piz = 4,

    /// Lossy 24-bit float conversion plus zlib
    Pxr24 = 5,

    /// Lossy 4-by-4 pixel block encoding
    B44 = 6,

    /// B44 with flat-block optimization
    B44a = 7,
}

impl Compression {
    /// Create a Compression from its wire byte.
    ///
    /// The table is closed; bytes outside it are a format error.
    pub fn from_u8(value: u8) -> Result<Self, FormatError> {
        match value {
            0 => Ok(Compression::None),
            1 => Ok(Compression::Rle),
            2 => Ok(Compression::Zips),
            3 => Ok(Compression::Zip),
            4 => Ok(Compression::Piz),
            5 => Ok(Compression::Pxr24),
            6 => Ok(Compression::B44),
            7 => Ok(Compression::B44a),
            other => Err(FormatError::UnknownCompression(other)),
        }
    }

    /// Get the codec's conventional name.
    pub const fn name(self) -> &'static str {
        match self {
            Compression::None => "NO",
            Compression::Rle => "RLE",
            Compression::Zips => "ZIPS",
            Compression::Zip => "ZIP",
            Compression::Piz => "PIZ",
            Compression::Pxr24 => "PXR24",
            Compression::B44 => "B44",
            Compression::B44a => "B44A",
        }
    }
}

// =============================================================================
// LineOrder
// =============================================================================

/// Scan-line storage order within the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LineOrder {
    /// Scan lines stored top to bottom
    IncreasingY = 0,

    /// Scan lines stored bottom to top
    DecreasingY = 1,

    /// Tiles in arbitrary order (tiled images only)
    RandomY = 2,
}

impl LineOrder {
    /// Create a LineOrder from its wire byte.
    pub fn from_u8(value: u8) -> Result<Self, FormatError> {
        match value {
            0 => Ok(LineOrder::IncreasingY),
            1 => Ok(LineOrder::DecreasingY),
            2 => Ok(LineOrder::RandomY),
            other => Err(FormatError::UnknownLineOrder(other)),
        }
    }

    /// Get a human-readable name for the line order.
    pub const fn name(self) -> &'static str {
        match self {
            LineOrder::IncreasingY => "INCREASING_Y",
            LineOrder::DecreasingY => "DECREASING_Y",
            LineOrder::RandomY => "RANDOM_Y",
        }
    }
}

// =============================================================================
// Box2i
// =============================================================================

/// An integer bounding box (used by the data and display window attributes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Box2i {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

// =============================================================================
// AttrValue
// =============================================================================

/// A decoded attribute value.
///
/// One variant per recognized type tag, plus [`Opaque`](AttrValue::Opaque)
/// for everything else. The variant implies the tag string; for opaque
/// values the original tag travels with the bytes so
/// [`Header::attribute_info`](crate::Header::attribute_info) can report it.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// `int`: one i32
    I32(i32),

    /// `float`: one f32
    F32(f32),

    /// `double`: one f64
    F64(f64),

    /// `string`: exact-length text, not null-terminated on the wire
    Text(String),

    /// `box2i`: four i32 (x_min, y_min, x_max, y_max)
    Box2i(Box2i),

    /// `v2i`: two i32
    V2i([i32; 2]),

    /// `v2f`: two f32
    V2f([f32; 2]),

    /// `v3i`: three i32
    V3i([i32; 3]),

    /// `v3f`: three f32
    V3f([f32; 3]),

    /// `compression`: codec selector byte
    Compression(Compression),

    /// `lineOrder`: scan-line order byte
    LineOrder(LineOrder),

    /// `chlist`: the channel list
    Channels(ChannelList),

    /// Unrecognized type tag: raw payload bytes, never an error
    Opaque { type_tag: String, data: Bytes },
}

/// Check that a fixed-size attribute's declared payload length matches its
/// wire size.
fn expect_size(
    type_tag: &'static str,
    expected: usize,
    payload: &[u8],
) -> Result<(), FormatError> {
    if payload.len() != expected {
        return Err(FormatError::SizeMismatch {
            type_tag,
            expected,
            actual: payload.len(),
        });
    }
    Ok(())
}

impl AttrValue {
    /// Decode a payload according to its type tag.
    ///
    /// Fixed-size tags reject payloads whose declared size disagrees with
    /// the type's wire size. `string`, `chlist` and opaque payloads are
    /// inherently variable-length.
    pub fn decode(type_tag: &str, payload: Bytes) -> Result<Self, FormatError> {
        let value = match type_tag {
            "int" => {
                expect_size("int", 4, &payload)?;
                AttrValue::I32(read_i32_le(&payload))
            }
            "float" => {
                expect_size("float", 4, &payload)?;
                AttrValue::F32(read_f32_le(&payload))
            }
            "double" => {
                expect_size("double", 8, &payload)?;
                AttrValue::F64(read_f64_le(&payload))
            }
            "string" => AttrValue::Text(String::from_utf8_lossy(&payload).into_owned()),
            "box2i" => {
                expect_size("box2i", 16, &payload)?;
                AttrValue::Box2i(Box2i {
                    x_min: read_i32_le(&payload[0..4]),
                    y_min: read_i32_le(&payload[4..8]),
                    x_max: read_i32_le(&payload[8..12]),
                    y_max: read_i32_le(&payload[12..16]),
                })
            }
            "v2i" => {
                expect_size("v2i", 8, &payload)?;
                AttrValue::V2i([read_i32_le(&payload[0..4]), read_i32_le(&payload[4..8])])
            }
            "v2f" => {
                expect_size("v2f", 8, &payload)?;
                AttrValue::V2f([read_f32_le(&payload[0..4]), read_f32_le(&payload[4..8])])
            }
            "v3i" => {
                expect_size("v3i", 12, &payload)?;
                AttrValue::V3i([
                    read_i32_le(&payload[0..4]),
                    read_i32_le(&payload[4..8]),
                    read_i32_le(&payload[8..12]),
                ])
            }
            "v3f" => {
                expect_size("v3f", 12, &payload)?;
                AttrValue::V3f([
                    read_f32_le(&payload[0..4]),
                    read_f32_le(&payload[4..8]),
                    read_f32_le(&payload[8..12]),
                ])
            }
            "compression" => {
                expect_size("compression", 1, &payload)?;
                AttrValue::Compression(Compression::from_u8(payload[0])?)
            }
            "lineOrder" => {
                expect_size("lineOrder", 1, &payload)?;
                AttrValue::LineOrder(LineOrder::from_u8(payload[0])?)
            }
            "chlist" => AttrValue::Channels(ChannelList::from_payload(&payload)?),
            _ => AttrValue::Opaque {
                type_tag: type_tag.to_string(),
                data: payload,
            },
        };
        Ok(value)
    }

    /// The type tag this value was decoded from.
    pub fn type_tag(&self) -> &str {
        match self {
            AttrValue::I32(_) => "int",
            AttrValue::F32(_) => "float",
            AttrValue::F64(_) => "double",
            AttrValue::Text(_) => "string",
            AttrValue::Box2i(_) => "box2i",
            AttrValue::V2i(_) => "v2i",
            AttrValue::V2f(_) => "v2f",
            AttrValue::V3i(_) => "v3i",
            AttrValue::V3f(_) => "v3f",
            AttrValue::Compression(_) => "compression",
            AttrValue::LineOrder(_) => "lineOrder",
            AttrValue::Channels(_) => "chlist",
            AttrValue::Opaque { type_tag, .. } => type_tag,
        }
    }

    /// The channel list, if this is a `chlist` value.
    pub fn as_channels(&self) -> Option<&ChannelList> {
        match self {
            AttrValue::Channels(list) => Some(list),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
