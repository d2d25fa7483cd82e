use thiserror::Error;

/// Errors raised while decoding or validating wire bytes.
///
/// Builders never fail: out-of-range numeric input is masked to wire width
/// instead of rejected, so the send path cannot error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("MIDI message is empty")]
    EmptyMessage,

    #[error("{kind} message too short: expected {expected} bytes, got {actual}")]
    TooShort {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("MIDI message too long: got {actual} bytes, wire messages are at most 3")]
    TooLong { actual: usize },

    #[error("expected {expected} message, got status byte 0x{status:02X}")]
    KindMismatch { expected: &'static str, status: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
