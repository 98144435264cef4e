mod list;

#[allow(clippy::module_inception)]
mod channel;

pub use channel::{Channel, PixelType};
pub use list::ChannelList;
