//! Wire message container, the channel/system category partition and the
//! channel numbering convention shared by every channel-voice message.
//!
//! A MIDI 1.0 wire message is 1 to 3 bytes. The first byte is the status
//! byte: its high nibble selects the message kind and, for channel messages,
//! its low nibble carries the channel. Messages whose status byte has a high
//! nibble of `0xF` are system messages and carry no channel. The partition is
//! total: every possible first byte is either a channel message or a system
//! message, never both.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{note, system, voice};

/// High-nibble mask selecting the message kind from a status byte.
pub const STATUS_MASK: u8 = 0xF0;

/// Low-nibble mask selecting the channel from a channel-message status byte.
pub const CHANNEL_MASK: u8 = 0x0F;

/// Clamps a computed value to wire-byte width (`value & 0xFF`).
///
/// Out-of-range input silently truncates to its low byte; negative input
/// wraps two's-complement style. Every builder funnels arithmetic through
/// this so the send path never fails.
pub const fn mask_to_byte(value: i32) -> u8 {
    (value & 0xFF) as u8
}

/// Converts a MIDI channel as musicians number them (1-16) to the status
/// byte nibble carried on the wire (0-15).
///
/// Total over all of `u8`: out-of-range channels alias into 0-15 by
/// wrapping, so channel 0 yields nibble 15 and channel 17 yields nibble 0.
/// Callers wanting rejection must range-check before building.
pub const fn channel_nibble(channel: u8) -> u8 {
    channel.wrapping_sub(1) & CHANNEL_MASK
}

/// Reads the 1-indexed channel from a raw message, or `None` if the slice is
/// empty. Only meaningful for channel-category messages; system messages do
/// not carry a channel.
pub fn channel_of(message: &[u8]) -> Option<u8> {
    message.first().map(|status| (status & CHANNEL_MASK) + 1)
}

/// True iff the message is addressed to a channel (status high nibble is not
/// `0xF`). False for an empty slice.
pub fn is_channel_message(message: &[u8]) -> bool {
    matches!(message.first(), Some(status) if status & STATUS_MASK != 0xF0)
}

/// True iff the message is a system message (status high nibble `0xF`).
/// False for an empty slice. Exact complement of [`is_channel_message`] for
/// every non-empty message.
pub fn is_system_message(message: &[u8]) -> bool {
    matches!(message.first(), Some(status) if status & STATUS_MASK == 0xF0)
}

/// An owned MIDI wire message: 1 to 3 bytes stored inline.
///
/// This is the sole representation a message ever has. There is no parsed
/// form kept anywhere; classification and field extraction recompute from
/// the bytes on demand. Values are immutable once built and independently
/// owned, so they are freely `Copy`-able across threads.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MidiMessage {
    data: [u8; 3],
    len: u8,
}

impl MidiMessage {
    /// Longest wire message modeled here (sysex is out of scope).
    pub const MAX_LEN: usize = 3;

    pub(crate) const fn from_array(data: [u8; 3], len: u8) -> Self {
        Self { data, len }
    }

    /// Copies 1-3 raw bytes into an owned message.
    ///
    /// Rejects empty input and anything longer than [`MAX_LEN`](Self::MAX_LEN)
    /// bytes: a longer chunk is a sysex dump or a batched stream, and
    /// silently truncating it would fabricate a message that was never sent.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyMessage);
        }
        if bytes.len() > Self::MAX_LEN {
            return Err(Error::TooLong {
                actual: bytes.len(),
            });
        }
        let mut data = [0u8; 3];
        data[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            data,
            len: bytes.len() as u8,
        })
    }

    /// The wire bytes of this message.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// Number of wire bytes (1-3).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; a message carries at least its status byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The status byte (byte 0).
    pub fn status(&self) -> u8 {
        self.data[0]
    }

    /// The 1-indexed channel packed into the status byte's low nibble.
    /// Meaningful only for channel-category messages.
    pub fn channel(&self) -> u8 {
        (self.data[0] & CHANNEL_MASK) + 1
    }

    /// Classifies this message; see [`MessageKind::of`].
    pub fn kind(&self) -> Option<MessageKind> {
        MessageKind::of(self.as_bytes())
    }
}

impl AsRef<[u8]> for MidiMessage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for MidiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MidiMessage(")?;
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        write!(f, ")")
    }
}

/// Validates status nibble and length for a typed channel-message wrapper.
/// Extra trailing data bytes beyond `expected_len` are tolerated; the
/// extractors only read the documented positions.
pub(crate) fn checked_channel(
    bytes: &[u8],
    kind: &'static str,
    status_nibble: u8,
    expected_len: usize,
) -> Result<MidiMessage> {
    let message = MidiMessage::from_bytes(bytes)?;
    if message.status() & STATUS_MASK != status_nibble {
        return Err(Error::KindMismatch {
            expected: kind,
            status: message.status(),
        });
    }
    if message.len() < expected_len {
        tracing::debug!(
            "rejecting truncated {} message ({} of {} bytes)",
            kind,
            message.len(),
            expected_len
        );
        return Err(Error::TooShort {
            kind,
            expected: expected_len,
            actual: message.len(),
        });
    }
    Ok(message)
}

/// Validates the full status byte for a typed system-message wrapper.
pub(crate) fn checked_system(bytes: &[u8], kind: &'static str, status: u8) -> Result<MidiMessage> {
    let message = MidiMessage::from_bytes(bytes)?;
    if message.status() != status {
        return Err(Error::KindMismatch {
            expected: kind,
            status: message.status(),
        });
    }
    Ok(message)
}

/// Message kind recomputed from raw bytes; never stored alongside them.
///
/// Channel kinds cover status nibbles `0x80..=0xE0`. System kinds cover the
/// three modeled real-time bytes, with every other `0xF`-nibble byte
/// collected into [`OtherSystem`](MessageKind::OtherSystem) rather than
/// treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    PolyphonicAftertouch,
    ControlChange,
    ProgramChange,
    ChannelAftertouch,
    PitchBend,
    Start,
    Stop,
    Continue,
    OtherSystem,
}

impl MessageKind {
    /// Classifies a raw message, most specific kind first.
    ///
    /// Returns `None` for an empty slice, for a leading data byte
    /// (`0x00..=0x7F`, not a status byte), and for a note message truncated
    /// before the velocity byte that decides between Note On and Note Off.
    pub fn of(message: &[u8]) -> Option<MessageKind> {
        let status = *message.first()?;
        let kind = match status & STATUS_MASK {
            0xF0 => match status {
                system::START => MessageKind::Start,
                system::STOP => MessageKind::Stop,
                system::CONTINUE => MessageKind::Continue,
                _ => MessageKind::OtherSystem,
            },
            note::NOTE_OFF => MessageKind::NoteOff,
            note::NOTE_ON => {
                if note::is_note_on(message) {
                    MessageKind::NoteOn
                } else if note::is_note_off(message) {
                    MessageKind::NoteOff
                } else {
                    tracing::debug!(
                        "note message 0x{:02X} is missing its velocity byte",
                        status
                    );
                    return None;
                }
            }
            voice::POLYPHONIC_AFTERTOUCH => MessageKind::PolyphonicAftertouch,
            voice::CONTROL_CHANGE => MessageKind::ControlChange,
            voice::PROGRAM_CHANGE => MessageKind::ProgramChange,
            voice::CHANNEL_AFTERTOUCH => MessageKind::ChannelAftertouch,
            voice::PITCH_BEND => MessageKind::PitchBend,
            _ => {
                tracing::debug!("byte 0x{:02X} is not a status byte", status);
                return None;
            }
        };
        tracing::trace!("classified MIDI message as {:?} (status 0x{:02X})", kind, status);
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{build_note_on, is_note_off, is_note_on};
    use crate::system::{is_continue, is_start, is_stop};
    use crate::voice::{
        is_channel_aftertouch, is_control_change, is_pitch_bend, is_polyphonic_aftertouch,
        is_program_change,
    };

    #[test]
    fn test_channel_nibble() {
        assert_eq!(channel_nibble(1), 0);
        assert_eq!(channel_nibble(10), 9);
        assert_eq!(channel_nibble(16), 15);
    }

    #[test]
    fn test_channel_nibble_wraps_out_of_range() {
        // No validation: out-of-range channels alias into 0-15.
        assert_eq!(channel_nibble(0), 15);
        assert_eq!(channel_nibble(17), 0);
        assert_eq!(channel_nibble(255), 14);
    }

    #[test]
    fn test_mask_to_byte() {
        assert_eq!(mask_to_byte(0), 0);
        assert_eq!(mask_to_byte(0x1FF), 0xFF);
        assert_eq!(mask_to_byte(-12), 244);
    }

    #[test]
    fn test_category_partition_is_total_and_exclusive() {
        for byte in 0..=255u8 {
            let message = [byte, 0, 0];
            let channel = is_channel_message(&message);
            let system = is_system_message(&message);
            assert_ne!(channel, system, "byte 0x{:02X} must match exactly one category", byte);
            assert_eq!(system, byte & STATUS_MASK == 0xF0);
        }
    }

    #[test]
    fn test_category_predicates_reject_empty() {
        assert!(!is_channel_message(&[]));
        assert!(!is_system_message(&[]));
        assert_eq!(channel_of(&[]), None);
    }

    #[test]
    fn test_channel_round_trips_through_builder() {
        for channel in 1..=16u8 {
            let message = build_note_on(channel, 64, 100);
            assert_eq!(message.channel(), channel);
            assert_eq!(channel_of(message.as_bytes()), Some(channel));
        }
    }

    #[test]
    fn test_from_bytes_accepts_wire_lengths() {
        for bytes in [&[0xFA][..], &[0xC0, 5][..], &[0x90, 60, 127][..]] {
            let message = MidiMessage::from_bytes(bytes).unwrap();
            assert_eq!(message.as_bytes(), bytes);
            assert_eq!(message.len(), bytes.len());
        }
    }

    #[test]
    fn test_from_bytes_rejects_empty_and_oversized() {
        assert_eq!(MidiMessage::from_bytes(&[]), Err(Error::EmptyMessage));
        assert_eq!(
            MidiMessage::from_bytes(&[0xF0, 1, 2, 0xF7]),
            Err(Error::TooLong { actual: 4 })
        );
    }

    #[test]
    fn test_kind_agrees_with_predicates() {
        for status in 0..=255u8 {
            for data in [0u8, 64] {
                let message = [status, 60, data];
                let kind = MessageKind::of(&message);
                match kind {
                    Some(MessageKind::NoteOn) => assert!(is_note_on(&message)),
                    Some(MessageKind::NoteOff) => assert!(is_note_off(&message)),
                    Some(MessageKind::PolyphonicAftertouch) => {
                        assert!(is_polyphonic_aftertouch(&message))
                    }
                    Some(MessageKind::ControlChange) => assert!(is_control_change(&message)),
                    Some(MessageKind::ProgramChange) => assert!(is_program_change(&message)),
                    Some(MessageKind::ChannelAftertouch) => {
                        assert!(is_channel_aftertouch(&message))
                    }
                    Some(MessageKind::PitchBend) => assert!(is_pitch_bend(&message)),
                    Some(MessageKind::Start) => assert!(is_start(&message)),
                    Some(MessageKind::Stop) => assert!(is_stop(&message)),
                    Some(MessageKind::Continue) => assert!(is_continue(&message)),
                    Some(MessageKind::OtherSystem) => {
                        assert!(is_system_message(&message));
                        assert!(!is_start(&message) && !is_stop(&message) && !is_continue(&message));
                    }
                    // Leading data bytes are unclassifiable.
                    None => assert!(status < 0x80),
                }
            }
        }
    }

    #[test]
    fn test_kind_of_truncated_note_message() {
        // 0x9n without a velocity byte cannot be told apart from a note off.
        assert_eq!(MessageKind::of(&[0x90, 60]), None);
        // 0x8n is a note off on the status nibble alone.
        assert_eq!(MessageKind::of(&[0x80]), Some(MessageKind::NoteOff));
    }

    #[test]
    fn test_debug_formats_bytes() {
        let message = MidiMessage::from_bytes(&[0x90, 60, 127]).unwrap();
        assert_eq!(format!("{:?}", message), "MidiMessage(90 3C 7F)");
    }
}
