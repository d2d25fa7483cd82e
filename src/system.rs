//! The three modeled system real-time messages: Start, Stop and Continue.
//!
//! Each is a single status byte matched in full, not by nibble. Every other
//! byte with a `0xF` high nibble (timing clock `0xF8`, the sysex markers
//! `0xF0`/`0xF7`, active sensing `0xFE`, ...) still satisfies
//! [`is_system_message`](crate::message::is_system_message) but matches none
//! of these classifiers; such traffic is an "other system message" for the
//! caller to pass through or drop, never an error.

use crate::error::Result;
use crate::message::{checked_system, MidiMessage};

/// Start playing from the top.
pub const START: u8 = 0xFA;
/// Continue playing from the current position.
pub const CONTINUE: u8 = 0xFB;
/// Stop playing, keeping the current position.
pub const STOP: u8 = 0xFC;

pub fn is_start(message: &[u8]) -> bool {
    message.first() == Some(&START)
}

pub fn is_stop(message: &[u8]) -> bool {
    message.first() == Some(&STOP)
}

pub fn is_continue(message: &[u8]) -> bool {
    message.first() == Some(&CONTINUE)
}

pub fn build_start() -> Start {
    Start(MidiMessage::from_array([START, 0, 0], 1))
}

pub fn build_stop() -> Stop {
    Stop(MidiMessage::from_array([STOP, 0, 0], 1))
}

pub fn build_continue() -> Continue {
    Continue(MidiMessage::from_array([CONTINUE, 0, 0], 1))
}

/// A message known to be a Start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Start(MidiMessage);

impl Start {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_system(bytes, "start", START)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for Start {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<Start> for MidiMessage {
    fn from(message: Start) -> Self {
        message.0
    }
}

/// A message known to be a Stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stop(MidiMessage);

impl Stop {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_system(bytes, "stop", STOP)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for Stop {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<Stop> for MidiMessage {
    fn from(message: Stop) -> Self {
        message.0
    }
}

/// A message known to be a Continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Continue(MidiMessage);

impl Continue {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_system(bytes, "continue", CONTINUE)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for Continue {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<Continue> for MidiMessage {
    fn from(message: Continue) -> Self {
        message.0
    }
}
