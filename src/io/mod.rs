mod byte_source;

pub use byte_source::{
    read_f32_le, read_f64_le, read_i32_le, read_u32_le, ByteSource, SliceSource, StreamSource,
};
