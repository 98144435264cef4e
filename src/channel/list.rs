//! Ordered channel sequence with layer-aware queries.
//!
//! A [`ChannelList`] wraps the channels of one `chlist` attribute in their
//! on-wire order. The wire format guarantees that order is ascending by name
//! (byte order), and every contiguous-run query below leans on that:
//! channels sharing a prefix always sit next to each other, so prefix and
//! layer lookups return slices of the original sequence.
//!
//! # Sortedness Precondition
//!
//! The list never re-sorts or verifies its input. Feeding an unsorted
//! sequence through [`ChannelList::new`] makes the prefix queries return
//! incomplete runs; suffix queries and [`default_channels`] are full scans
//! and remain correct regardless.
//!
//! [`default_channels`]: ChannelList::default_channels

use crate::error::FormatError;
use crate::io::read_i32_le;

use super::channel::{Channel, PixelType};

/// Byte length of the four fixed i32 fields in a channel record.
const CHANNEL_FIELD_BYTES: usize = 16;

/// Maximum length of a channel name in bytes, per the format's name limit.
const MAX_NAME_LEN: usize = 255;

// =============================================================================
// ChannelList
// =============================================================================

/// The decoded value of a `chlist` attribute: channels in on-wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelList {
    channels: Vec<Channel>,
}

impl ChannelList {
    /// Create a channel list from an already-ordered sequence.
    ///
    /// `channels` must be sorted ascending by name in byte order; see the
    /// module docs. Lists built by the header decoder inherit this ordering
    /// from the wire format.
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// Decode a channel list from a `chlist` attribute payload.
    ///
    /// Record layout, repeated while more than one byte remains:
    /// a null-terminated name followed by four little-endian i32 fields in
    /// wire order `(pixel_type, p_linear, x_sampling, y_sampling)`. The
    /// final payload byte is the list terminator and is never part of a
    /// record.
    pub fn from_payload(payload: &[u8]) -> Result<Self, FormatError> {
        let size = payload.len();
        let mut channels = Vec::new();
        let mut cursor = 0;

        while cursor + 1 < size {
            let rest = &payload[cursor..];
            let name_len = rest
                .iter()
                .position(|&b| b == 0)
                .ok_or(FormatError::TruncatedChannelList {
                    reason: "unterminated channel name",
                })?;
            if name_len > MAX_NAME_LEN {
                return Err(FormatError::NameTooLong {
                    limit: MAX_NAME_LEN,
                });
            }
            let name = String::from_utf8_lossy(&rest[..name_len]).into_owned();
            cursor += name_len + 1;

            if cursor + CHANNEL_FIELD_BYTES > size {
                return Err(FormatError::TruncatedChannelList {
                    reason: "channel record fields truncated",
                });
            }
            let fields = &payload[cursor..cursor + CHANNEL_FIELD_BYTES];
            let pixel_type = PixelType::from_i32(read_i32_le(&fields[0..4]))?;
            let p_linear = read_i32_le(&fields[4..8]) != 0;
            let x_sampling = read_i32_le(&fields[8..12]);
            let y_sampling = read_i32_le(&fields[12..16]);
            cursor += CHANNEL_FIELD_BYTES;

            channels.push(Channel {
                name,
                pixel_type,
                x_sampling,
                y_sampling,
                p_linear,
            });
        }

        Ok(Self { channels })
    }

    // -------------------------------------------------------------------------
    // Container access
    // -------------------------------------------------------------------------

    /// Number of channels in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the list holds no channels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channel at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    /// Look up a channel by exact name via binary search.
    pub fn find(&self, name: &str) -> Option<&Channel> {
        self.channels
            .binary_search_by(|c| c.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.channels[i])
    }

    /// Iterate over all channels in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Channel> {
        self.channels.iter()
    }

    /// All channels as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Channel] {
        &self.channels
    }

    // -------------------------------------------------------------------------
    // Layer queries
    // -------------------------------------------------------------------------

    /// The maximal contiguous run of channels whose name starts with
    /// `prefix`, in original order.
    ///
    /// The run's start is located by binary search over the sorted order;
    /// matches are guaranteed contiguous by sortedness. Empty if nothing
    /// matches.
    pub fn channels_with_prefix(&self, prefix: &str) -> &[Channel] {
        let start = self
            .channels
            .partition_point(|c| c.name.as_str() < prefix);
        let run = self.channels[start..]
            .iter()
            .take_while(|c| c.name.starts_with(prefix))
            .count();
        &self.channels[start..start + run]
    }

    /// All channels belonging to `layer`, i.e. named `layer.<suffix>`.
    pub fn channels_in_layer(&self, layer: &str) -> &[Channel] {
        let mut prefix = String::with_capacity(layer.len() + 1);
        prefix.push_str(layer);
        prefix.push('.');
        self.channels_with_prefix(&prefix)
    }

    /// Every channel whose derived suffix equals `suffix`.
    ///
    /// Suffixes of channels in different layers are not adjacent in the
    /// sorted order, so this scans the whole list. Case folding is ASCII
    /// when `case_insensitive` is set, matching the latin-letter channel
    /// suffixes the format uses in practice.
    pub fn channels_with_suffix(&self, suffix: &str, case_insensitive: bool) -> Vec<&Channel> {
        self.channels
            .iter()
            .filter(|c| {
                if case_insensitive {
                    c.suffix().eq_ignore_ascii_case(suffix)
                } else {
                    c.suffix() == suffix
                }
            })
            .collect()
    }

    /// The distinct layer names in the list, sorted and deduplicated.
    ///
    /// Default channels contribute nothing here.
    pub fn layers(&self) -> Vec<&str> {
        let mut layers: Vec<&str> = self.channels.iter().filter_map(|c| c.layer()).collect();
        layers.sort_unstable();
        layers.dedup();
        layers
    }

    /// All channels belonging to no layer, preserving their relative order.
    pub fn default_channels(&self) -> Vec<&Channel> {
        self.channels.iter().filter(|c| c.is_default()).collect()
    }
}

impl std::ops::Index<usize> for ChannelList {
    type Output = Channel;

    fn index(&self, index: usize) -> &Channel {
        &self.channels[index]
    }
}

impl<'a> IntoIterator for &'a ChannelList {
    type Item = &'a Channel;
    type IntoIter = std::slice::Iter<'a, Channel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
