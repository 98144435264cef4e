//! # exr-header
//!
//! Decoder for the OpenEXR header block with layer-aware channel list
//! queries.
//!
//! This library reads the header section of an OpenEXR container — magic
//! number, version field, and the terminated sequence of named, typed
//! attribute records — and exposes a query model over the decoded
//! attributes. The channel list attribute gets special treatment: channels
//! carry dot-delimited hierarchical names, and [`ChannelList`] supports
//! grouping them into layers and looking them up by name prefix or suffix.
//!
//! Pixel data, compression codecs, and header writing are deliberately out
//! of scope: the compression and line-order attributes are decoded as
//! identifiers only.
//!
//! ## Architecture
//!
//! The library is organized into three modules, consumed bottom-up:
//!
//! - [`io`] - byte source abstraction and little-endian read helpers
//! - [`header`] - the attribute decoder and the [`Header`] query API
//! - [`channel`] - the [`Channel`] record and [`ChannelList`] query model
//!
//! ## Example
//!
//! ```rust
//! use exr_header::{Header, SliceSource};
//!
//! fn print_layers(header_bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
//!     let header = Header::read(&mut SliceSource::new(header_bytes))?;
//!     let channels = header.channels()?;
//!     for layer in channels.layers() {
//!         println!("{layer}: {} channels", channels.channels_in_layer(layer).len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod error;
pub mod header;
pub mod io;

// Re-export commonly used types
pub use channel::{Channel, ChannelList, PixelType};
pub use error::{FormatError, IoError, LookupError};
pub use header::{AttrValue, Box2i, Compression, Header, LineOrder, MAGIC, MAX_NAME_LEN};
pub use io::{ByteSource, SliceSource, StreamSource};
