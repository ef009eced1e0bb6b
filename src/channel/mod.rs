pub mod api;
pub mod frame;
pub mod stdio;

pub use api::{ChannelEvent, MediaChannel};
pub use frame::{FrameKind, OutgoingFrame};
pub use stdio::StdioChannel;
