mod parser;
mod values;

pub use parser::{Header, MAGIC, MAX_NAME_LEN};
pub use values::{AttrValue, Box2i, Compression, LineOrder};
