//! Channel record type and layer-name derivation.
//!
//! A channel name is a dot-delimited hierarchical identifier such as
//! `diffuse.G`. The portion before the last dot is the channel's *layer*,
//! the portion after it is the *suffix*. A name with no usable separator
//! (no dot at all, or a dot in first or last position) belongs to no layer
//! and is called a *default channel*.

use crate::error::FormatError;

// =============================================================================
// PixelType
// =============================================================================

/// Sample type of a channel's pixel data.
///
/// Stored on the wire as a little-endian i32 in each channel record. Values
/// outside the three-entry table are rejected during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PixelType {
    /// Unsigned 32-bit integer samples
    Uint = 0,

    /// 16-bit half-float samples
    Half = 1,

    /// 32-bit float samples
    Float = 2,
}

impl PixelType {
    /// Create a PixelType from its wire value.
    ///
    /// Returns an error for values outside the table; the set of pixel types
    /// is closed.
    pub fn from_i32(value: i32) -> Result<Self, FormatError> {
        match value {
            0 => Ok(PixelType::Uint),
            1 => Ok(PixelType::Half),
            2 => Ok(PixelType::Float),
            other => Err(FormatError::UnknownPixelType(other)),
        }
    }

    /// Get a human-readable name for the pixel type.
    pub const fn name(self) -> &'static str {
        match self {
            PixelType::Uint => "UINT",
            PixelType::Half => "HALF",
            PixelType::Float => "FLOAT",
        }
    }
}

// =============================================================================
// Channel
// =============================================================================

/// A single channel record from a `chlist` attribute.
///
/// # Equality
///
/// Two notions of equality exist and they compare different fields:
///
/// - `==` is *identity* equality and compares the name only. Two channels
///   named `R` are the same channel even if their sample formats differ.
/// - [`is_compatible`](Channel::is_compatible) is *binary* compatibility and
///   compares pixel type and sampling factors, ignoring name and `p_linear`.
///   Compatible channels can be copied between images without resampling.
#[derive(Debug, Clone)]
pub struct Channel {
    /// Dot-delimited hierarchical channel name (e.g. `diffuse.G`)
    pub name: String,

    /// Sample type of the pixel data
    pub pixel_type: PixelType,

    /// Horizontal subsampling factor (1 = every pixel)
    pub x_sampling: i32,

    /// Vertical subsampling factor (1 = every row)
    pub y_sampling: i32,

    /// Whether samples are perceptually linear
    pub p_linear: bool,
}

impl Channel {
    /// Create a new channel record.
    pub fn new(
        name: impl Into<String>,
        pixel_type: PixelType,
        x_sampling: i32,
        y_sampling: i32,
        p_linear: bool,
    ) -> Self {
        Self {
            name: name.into(),
            pixel_type,
            x_sampling,
            y_sampling,
            p_linear,
        }
    }

    /// Check whether this channel's pixel data is binary-compatible with
    /// another channel's.
    ///
    /// Compares pixel type and both sampling factors; name and `p_linear`
    /// play no part. Always true for `a.is_compatible(&a)`.
    #[inline]
    pub fn is_compatible(&self, other: &Channel) -> bool {
        self.pixel_type == other.pixel_type
            && self.x_sampling == other.x_sampling
            && self.y_sampling == other.y_sampling
    }

    /// Index of the last dot if it splits the name into two non-empty parts.
    fn layer_split(&self) -> Option<usize> {
        match self.name.rfind('.') {
            Some(i) if i > 0 && i < self.name.len() - 1 => Some(i),
            _ => None,
        }
    }

    /// The layer this channel belongs to, or `None` for a default channel.
    ///
    /// The layer is everything before the last dot, provided that dot is
    /// neither the first nor the last character of the name.
    pub fn layer(&self) -> Option<&str> {
        self.layer_split().map(|i| &self.name[..i])
    }

    /// The channel's suffix: the part after the last dot, or the whole name
    /// for a default channel.
    pub fn suffix(&self) -> &str {
        match self.layer_split() {
            Some(i) => &self.name[i + 1..],
            None => &self.name,
        }
    }

    /// Whether this channel belongs to no layer.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.layer_split().is_none()
    }
}

// Identity equality: name only. Binary compatibility is a separate,
// deliberately un-overloaded operation (`is_compatible`).
impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Channel {}

// =============================================================================
// Tests
// =============================================================================
