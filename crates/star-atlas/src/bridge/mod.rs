pub mod protocol;

pub use protocol::FrameHeader;
