//! # fibdrv-device
//!
//! A `Device` hands out at most one `Session` at a time. The session holds a
//! position in `[0, MAX_POSITION]`; reads return F(position) as decimal
//! text and writes time one of the fixed-width variants at that position.

pub mod device;
pub mod protocol;

pub use device::{Device, Session};
pub use protocol::{Request, Response, Whence};
