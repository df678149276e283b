//! Request dispatch over an open session.

use fibdrv_core::error::FibError;

use crate::device::Session;

/// Reference point of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Whence {
    /// Absolute offset.
    Start,
    /// Relative to the current position.
    Current,
    /// Counted back from `MAX_POSITION`.
    End,
}

impl Whence {
    /// Decode the conventional 0/1/2 seek codes.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Start),
            1 => Some(Self::Current),
            2 => Some(Self::End),
            _ => None,
        }
    }

    #[must_use]
    pub fn raw(self) -> i32 {
        match self {
            Self::Start => 0,
            Self::Current => 1,
            Self::End => 2,
        }
    }
}

/// One operation against an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Seek { offset: i64, whence: Whence },
    Write { selector: u64 },
    Read,
}

/// Result of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// New position after a seek.
    Position(i64),
    /// Elapsed nanoseconds, or the sentinel for an unknown selector.
    Elapsed(u64),
    /// Decimal text of F(position).
    Value(Vec<u8>),
}

impl Session<'_> {
    /// Dispatch a request to seek, write or read.
    pub fn handle(&mut self, request: Request) -> Result<Response, FibError> {
        match request {
            Request::Seek { offset, whence } => Ok(Response::Position(self.seek(offset, whence))),
            Request::Write { selector } => Ok(Response::Elapsed(self.write(selector))),
            Request::Read => self.read().map(Response::Value),
        }
    }
}
