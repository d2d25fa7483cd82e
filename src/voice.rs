//! The channel-voice kinds besides notes: control change, program change,
//! pitch bend and both aftertouch forms.
//!
//! Each kind is a plain nibble match on the status byte; none of them has a
//! decoding ambiguity like the note pair. Program change and channel
//! aftertouch are 2-byte messages, the rest carry 2 data bytes.

use crate::error::Result;
use crate::message::{channel_nibble, checked_channel, MidiMessage, STATUS_MASK};

/// Polyphonic (per-key) aftertouch status nibble.
pub const POLYPHONIC_AFTERTOUCH: u8 = 0xA0;
/// Control change status nibble.
pub const CONTROL_CHANGE: u8 = 0xB0;
/// Program change status nibble.
pub const PROGRAM_CHANGE: u8 = 0xC0;
/// Channel aftertouch status nibble.
pub const CHANNEL_AFTERTOUCH: u8 = 0xD0;
/// Pitch bend status nibble.
pub const PITCH_BEND: u8 = 0xE0;

/// Pitch bend rest position: the middle of the 14-bit range.
pub const PITCH_BEND_CENTER: u16 = 0x2000;

fn status_matches(message: &[u8], status_nibble: u8) -> bool {
    matches!(message.first(), Some(status) if status & STATUS_MASK == status_nibble)
}

pub fn is_control_change(message: &[u8]) -> bool {
    status_matches(message, CONTROL_CHANGE)
}

pub fn is_program_change(message: &[u8]) -> bool {
    status_matches(message, PROGRAM_CHANGE)
}

pub fn is_pitch_bend(message: &[u8]) -> bool {
    status_matches(message, PITCH_BEND)
}

pub fn is_channel_aftertouch(message: &[u8]) -> bool {
    status_matches(message, CHANNEL_AFTERTOUCH)
}

pub fn is_polyphonic_aftertouch(message: &[u8]) -> bool {
    status_matches(message, POLYPHONIC_AFTERTOUCH)
}

/// Builds a control change: `[0xB0 | channel, controller, value]`.
pub fn build_control_change(channel: u8, controller: u8, value: u8) -> ControlChange {
    ControlChange(MidiMessage::from_array(
        [CONTROL_CHANGE | channel_nibble(channel), controller, value],
        3,
    ))
}

/// Builds a program change: `[0xC0 | channel, program]`. Two bytes, no
/// third data byte on the wire.
pub fn build_program_change(channel: u8, program: u8) -> ProgramChange {
    ProgramChange(MidiMessage::from_array(
        [PROGRAM_CHANGE | channel_nibble(channel), program, 0],
        2,
    ))
}

/// Builds a pitch bend from a 14-bit value (0-16383,
/// [`PITCH_BEND_CENTER`] = rest).
///
/// The wire order is the least-significant 7-bit group first:
/// `[0xE0 | channel, value & 0x7F, (value >> 7) & 0x7F]`. A value above
/// 16383 wraps into range via the masks.
pub fn build_pitch_bend(channel: u8, value: u16) -> PitchBend {
    PitchBend(MidiMessage::from_array(
        [
            PITCH_BEND | channel_nibble(channel),
            (value & 0x7F) as u8,
            ((value >> 7) & 0x7F) as u8,
        ],
        3,
    ))
}

/// Builds a channel aftertouch: `[0xD0 | channel, pressure]`. Two bytes.
pub fn build_channel_aftertouch(channel: u8, pressure: u8) -> ChannelAftertouch {
    ChannelAftertouch(MidiMessage::from_array(
        [CHANNEL_AFTERTOUCH | channel_nibble(channel), pressure, 0],
        2,
    ))
}

/// Builds a polyphonic aftertouch: `[0xA0 | channel, note, pressure]`.
pub fn build_polyphonic_aftertouch(channel: u8, note: u8, pressure: u8) -> PolyphonicAftertouch {
    PolyphonicAftertouch(MidiMessage::from_array(
        [POLYPHONIC_AFTERTOUCH | channel_nibble(channel), note, pressure],
        3,
    ))
}

/// A message known to be a control change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlChange(MidiMessage);

impl ControlChange {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_channel(
            bytes,
            "control change",
            CONTROL_CHANGE,
            3,
        )?))
    }

    pub fn channel(&self) -> u8 {
        self.0.channel()
    }

    pub fn controller(&self) -> u8 {
        self.0.as_bytes()[1]
    }

    pub fn value(&self) -> u8 {
        self.0.as_bytes()[2]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for ControlChange {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<ControlChange> for MidiMessage {
    fn from(message: ControlChange) -> Self {
        message.0
    }
}

/// A message known to be a program change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramChange(MidiMessage);

impl ProgramChange {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_channel(
            bytes,
            "program change",
            PROGRAM_CHANGE,
            2,
        )?))
    }

    pub fn channel(&self) -> u8 {
        self.0.channel()
    }

    pub fn program(&self) -> u8 {
        self.0.as_bytes()[1]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for ProgramChange {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<ProgramChange> for MidiMessage {
    fn from(message: ProgramChange) -> Self {
        message.0
    }
}

/// A message known to be a pitch bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchBend(MidiMessage);

impl PitchBend {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_channel(bytes, "pitch bend", PITCH_BEND, 3)?))
    }

    pub fn channel(&self) -> u8 {
        self.0.channel()
    }

    /// The 14-bit bend value, recombined from the two 7-bit data bytes
    /// (`((msb & 0x7F) << 7) | (lsb & 0x7F)`).
    pub fn value(&self) -> u16 {
        let bytes = self.0.as_bytes();
        ((bytes[2] as u16 & 0x7F) << 7) | (bytes[1] as u16 & 0x7F)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for PitchBend {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<PitchBend> for MidiMessage {
    fn from(message: PitchBend) -> Self {
        message.0
    }
}

/// A message known to be a channel aftertouch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelAftertouch(MidiMessage);

impl ChannelAftertouch {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_channel(
            bytes,
            "channel aftertouch",
            CHANNEL_AFTERTOUCH,
            2,
        )?))
    }

    pub fn channel(&self) -> u8 {
        self.0.channel()
    }

    pub fn pressure(&self) -> u8 {
        self.0.as_bytes()[1]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for ChannelAftertouch {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<ChannelAftertouch> for MidiMessage {
    fn from(message: ChannelAftertouch) -> Self {
        message.0
    }
}

/// A message known to be a polyphonic aftertouch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolyphonicAftertouch(MidiMessage);

impl PolyphonicAftertouch {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked_channel(
            bytes,
            "polyphonic aftertouch",
            POLYPHONIC_AFTERTOUCH,
            3,
        )?))
    }

    pub fn channel(&self) -> u8 {
        self.0.channel()
    }

    pub fn note_number(&self) -> u8 {
        self.0.as_bytes()[1]
    }

    pub fn pressure(&self) -> u8 {
        self.0.as_bytes()[2]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for PolyphonicAftertouch {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<PolyphonicAftertouch> for MidiMessage {
    fn from(message: PolyphonicAftertouch) -> Self {
        message.0
    }
}
