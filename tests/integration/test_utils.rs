//! Test utilities for integration tests.
//!
//! This module provides a byte-level builder for synthetic header streams
//! with arbitrary attribute and channel configurations.

use exr_header::MAGIC;

/// Initialize tracing output for tests, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Channel record encoding
// =============================================================================

/// One channel record for [`HeaderBuilder::add_channel_list`], in wire field
/// order: name, pixel type, pLinear, xSampling, ySampling.
#[derive(Clone)]
pub struct ChannelSpec {
    pub name: &'static str,
    pub pixel_type: i32,
    pub p_linear: i32,
    pub x_sampling: i32,
    pub y_sampling: i32,
}

impl ChannelSpec {
    /// A HALF channel with no subsampling, the common case.
    pub fn half(name: &'static str) -> Self {
        Self {
            name,
            pixel_type: 1,
            p_linear: 0,
            x_sampling: 1,
            y_sampling: 1,
        }
    }
}

/// Encode a `chlist` payload: channel records in order, then the single
/// zero terminator byte.
pub fn encode_chlist_payload(channels: &[ChannelSpec]) -> Vec<u8> {
    let mut payload = Vec::new();
    for ch in channels {
        payload.extend(ch.name.as_bytes());
        payload.push(0);
        payload.extend(ch.pixel_type.to_le_bytes());
        payload.extend(ch.p_linear.to_le_bytes());
        payload.extend(ch.x_sampling.to_le_bytes());
        payload.extend(ch.y_sampling.to_le_bytes());
    }
    payload.push(0);
    payload
}

// =============================================================================
// HeaderBuilder
// =============================================================================

/// Builds header byte streams for tests.
///
/// Attributes are emitted in insertion order; `build` appends the empty-name
/// sentinel that terminates the header.
pub struct HeaderBuilder {
    version: u32,
    attrs: Vec<(String, String, Vec<u8>)>,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self {
            version: 2,
            attrs: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Add a raw attribute record.
    pub fn add_attribute(
        mut self,
        name: impl Into<String>,
        type_tag: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        self.attrs.push((name.into(), type_tag.into(), payload));
        self
    }

    pub fn add_int(self, name: &str, value: i32) -> Self {
        self.add_attribute(name, "int", value.to_le_bytes().to_vec())
    }

    pub fn add_float(self, name: &str, value: f32) -> Self {
        self.add_attribute(name, "float", value.to_le_bytes().to_vec())
    }

    pub fn add_string(self, name: &str, value: &str) -> Self {
        self.add_attribute(name, "string", value.as_bytes().to_vec())
    }

    pub fn add_box2i(self, name: &str, bounds: [i32; 4]) -> Self {
        let mut payload = Vec::with_capacity(16);
        for v in bounds {
            payload.extend(v.to_le_bytes());
        }
        self.add_attribute(name, "box2i", payload)
    }

    pub fn add_compression(self, name: &str, value: u8) -> Self {
        self.add_attribute(name, "compression", vec![value])
    }

    pub fn add_line_order(self, name: &str, value: u8) -> Self {
        self.add_attribute(name, "lineOrder", vec![value])
    }

    pub fn add_channel_list(self, name: &str, channels: &[ChannelSpec]) -> Self {
        let payload = encode_chlist_payload(channels);
        self.add_attribute(name, "chlist", payload)
    }

    /// Emit the header bytes, including the terminating sentinel.
    pub fn build(self) -> Vec<u8> {
        let mut data = self.build_unterminated();
        data.push(0);
        data
    }

    /// Emit the header bytes without the terminating sentinel, for
    /// truncation tests.
    pub fn build_unterminated(self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend(MAGIC.to_le_bytes());
        data.extend(self.version.to_le_bytes());
        for (name, type_tag, payload) in &self.attrs {
            data.extend(name.as_bytes());
            data.push(0);
            data.extend(type_tag.as_bytes());
            data.push(0);
            data.extend((payload.len() as u32).to_le_bytes());
            data.extend(payload);
        }
        data
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Canned fixtures
// =============================================================================

/// A realistic multi-layer render header: RGBA + Z default channels plus
/// diffuse, shadow and specular layers, sorted by name in byte order.
pub fn create_multi_layer_header() -> Vec<u8> {
    // Uppercase sorts before lowercase in byte order.
    let channels = [
        ChannelSpec::half("A"),
        ChannelSpec::half("B"),
        ChannelSpec::half("G"),
        ChannelSpec::half("R"),
        ChannelSpec {
            name: "Z",
            pixel_type: 2,
            p_linear: 0,
            x_sampling: 1,
            y_sampling: 1,
        },
        ChannelSpec::half("diffuse.B"),
        ChannelSpec::half("diffuse.G"),
        ChannelSpec::half("diffuse.R"),
        ChannelSpec::half("shadow.B"),
        ChannelSpec::half("shadow.G"),
        ChannelSpec::half("shadow.R"),
        ChannelSpec::half("specular.B"),
        ChannelSpec::half("specular.G"),
        ChannelSpec::half("specular.R"),
    ];

    HeaderBuilder::new()
        .add_channel_list("channels", &channels)
        .add_compression("compression", 3)
        .add_box2i("dataWindow", [0, 0, 1919, 1079])
        .add_box2i("displayWindow", [0, 0, 1919, 1079])
        .add_line_order("lineOrder", 0)
        .add_float("pixelAspectRatio", 1.0)
        .build()
}
