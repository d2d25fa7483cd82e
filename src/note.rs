//! Note On / Note Off messages.
//!
//! These two kinds share one wire shape (`[status | channel, note, velocity]`)
//! and one deliberate ambiguity: a Note On with velocity 0 denotes a Note
//! Off. MIDI permits senders to reuse the Note On status for releases so a
//! stream of key events can share a running status byte. The classifiers
//! here absorb that rule so downstream logic never has to special-case it:
//! `[0x90, n, 0]` matches [`is_note_off`], not [`is_note_on`].

use crate::error::{Error, Result};
use crate::message::{channel_nibble, checked_channel, mask_to_byte, MidiMessage, STATUS_MASK};

/// Note Off status nibble.
pub const NOTE_OFF: u8 = 0x80;
/// Note On status nibble.
pub const NOTE_ON: u8 = 0x90;

/// True iff the message is a Note On with a non-zero velocity.
///
/// A `0x9n` message missing its velocity byte is undecidable and matches
/// neither note classifier.
pub fn is_note_on(message: &[u8]) -> bool {
    match message.first() {
        Some(status) if status & STATUS_MASK == NOTE_ON => {
            matches!(message.get(2), Some(velocity) if *velocity != 0)
        }
        _ => false,
    }
}

/// True iff the message is a Note Off: status nibble `0x80`, or a Note On
/// whose velocity byte is 0.
pub fn is_note_off(message: &[u8]) -> bool {
    let Some(status) = message.first() else {
        return false;
    };
    match status & STATUS_MASK {
        NOTE_OFF => true,
        NOTE_ON => message.get(2) == Some(&0),
        _ => false,
    }
}

fn build_note(status: u8, channel: u8, note: u8, velocity: u8, octave_offset: i8) -> MidiMessage {
    MidiMessage::from_array(
        [
            status | channel_nibble(channel),
            mask_to_byte(note as i32 + 12 * octave_offset as i32),
            velocity,
        ],
        3,
    )
}

/// Builds a Note On for a 1-indexed channel.
pub fn build_note_on(channel: u8, note: u8, velocity: u8) -> NoteOn {
    build_note_on_transposed(channel, note, velocity, 0)
}

/// Builds a Note On, shifting the note by whole octaves first.
///
/// The data byte is `(note + octave_offset * 12) & 0xFF`; a shift past the
/// byte range wraps rather than erroring, like every other builder input.
pub fn build_note_on_transposed(
    channel: u8,
    note: u8,
    velocity: u8,
    octave_offset: i8,
) -> NoteOn {
    NoteOn(build_note(NOTE_ON, channel, note, velocity, octave_offset))
}

/// Builds a Note Off for a 1-indexed channel.
pub fn build_note_off(channel: u8, note: u8, velocity: u8) -> NoteOff {
    build_note_off_transposed(channel, note, velocity, 0)
}

/// Builds a Note Off, shifting the note by whole octaves first.
pub fn build_note_off_transposed(
    channel: u8,
    note: u8,
    velocity: u8,
    octave_offset: i8,
) -> NoteOff {
    NoteOff(build_note(NOTE_OFF, channel, note, velocity, octave_offset))
}

/// A message known to be a Note On.
///
/// Only a builder or [`NoteOn::from_bytes`] can produce one, so the
/// extractors cannot be applied to bytes of another kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteOn(MidiMessage);

impl NoteOn {
    /// Validates raw bytes as a Note On.
    ///
    /// Fails on a wrong status nibble, on a velocity of 0 (that message is a
    /// Note Off) and on fewer than 3 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let message = checked_channel(bytes, "note on", NOTE_ON, 3)?;
        if message.as_bytes()[2] == 0 {
            return Err(Error::KindMismatch {
                expected: "note on",
                status: message.status(),
            });
        }
        Ok(Self(message))
    }

    pub fn channel(&self) -> u8 {
        self.0.channel()
    }

    pub fn note_number(&self) -> u8 {
        self.0.as_bytes()[1]
    }

    /// The note number with an octave shift undone, inverse of
    /// [`build_note_on_transposed`].
    pub fn note_number_transposed(&self, octave_offset: i8) -> u8 {
        mask_to_byte(self.note_number() as i32 - 12 * octave_offset as i32)
    }

    /// The note as a displayable pitch (name + octave).
    pub fn note(&self) -> NoteNumber {
        NoteNumber::new(self.note_number())
    }

    pub fn velocity(&self) -> u8 {
        self.0.as_bytes()[2]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for NoteOn {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<NoteOn> for MidiMessage {
    fn from(message: NoteOn) -> Self {
        message.0
    }
}

/// A message known to be a Note Off, including the Note On velocity-0 form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteOff(MidiMessage);

impl NoteOff {
    /// Validates raw bytes as a Note Off. Accepts both wire forms: status
    /// nibble `0x80`, and status nibble `0x90` with velocity 0.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let Some(&status) = bytes.first() else {
            return Err(Error::EmptyMessage);
        };
        let nibble = if status & STATUS_MASK == NOTE_ON && bytes.get(2) == Some(&0) {
            NOTE_ON
        } else {
            NOTE_OFF
        };
        Ok(Self(checked_channel(bytes, "note off", nibble, 3)?))
    }

    pub fn channel(&self) -> u8 {
        self.0.channel()
    }

    pub fn note_number(&self) -> u8 {
        self.0.as_bytes()[1]
    }

    /// The note number with an octave shift undone, inverse of
    /// [`build_note_off_transposed`].
    pub fn note_number_transposed(&self, octave_offset: i8) -> u8 {
        mask_to_byte(self.note_number() as i32 - 12 * octave_offset as i32)
    }

    /// The note as a displayable pitch (name + octave).
    pub fn note(&self) -> NoteNumber {
        NoteNumber::new(self.note_number())
    }

    pub fn velocity(&self) -> u8 {
        self.0.as_bytes()[2]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for NoteOff {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<NoteOff> for MidiMessage {
    fn from(message: NoteOff) -> Self {
        message.0
    }
}

/// A note number with pitch-name helpers (MIDI note 60 = C4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteNumber(u8);

impl NoteNumber {
    pub fn new(note: u8) -> Self {
        Self(note)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Octave number (-1 to 9 over the conventional 0-127 range).
    pub fn octave(&self) -> i8 {
        (self.0 / 12) as i8 - 1
    }

    /// Pitch-class name (C, C#, D, ...).
    pub fn name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        NAMES[self.0 as usize % 12]
    }
}

impl std::fmt::Display for NoteNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.name(), self.octave())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_note_on() {
        let message = build_note_on(1, 60, 127);
        assert_eq!(message.as_bytes(), &[0x90, 0x3C, 0x7F]);
        assert_eq!(message.as_bytes(), &[144, 60, 127]);
    }

    #[test]
    fn test_build_note_off() {
        let message = build_note_off(1, 60, 0);
        assert_eq!(message.as_bytes(), &[0x80, 0x3C, 0x00]);
    }

    #[test]
    fn test_zero_velocity_note_on_is_note_off() {
        let zero_velocity = [144, 60, 0];
        assert!(!is_note_on(&zero_velocity));
        assert!(is_note_off(&zero_velocity));

        let pressed = [144, 60, 127];
        assert!(is_note_on(&pressed));
        assert!(!is_note_off(&pressed));
    }

    #[test]
    fn test_note_classifiers_are_exclusive_over_note_statuses() {
        for status in [0x80u8, 0x85, 0x90, 0x9F] {
            for velocity in [0u8, 1, 64, 127] {
                let message = [status, 60, velocity];
                assert_ne!(
                    is_note_on(&message),
                    is_note_off(&message),
                    "status 0x{:02X} velocity {}",
                    status,
                    velocity
                );
            }
        }
    }

    #[test]
    fn test_classifiers_reject_short_input() {
        assert!(!is_note_on(&[]));
        assert!(!is_note_off(&[]));
        // A 0x9n fragment without its velocity byte decides neither way.
        assert!(!is_note_on(&[0x90, 60]));
        assert!(!is_note_off(&[0x90, 60]));
        // A 0x8n fragment is already a note off on the status alone.
        assert!(is_note_off(&[0x80, 60]));
    }

    #[test]
    fn test_transposed_build() {
        assert_eq!(
            build_note_on_transposed(1, 60, 100, 1).as_bytes(),
            &[0x90, 72, 100]
        );
        assert_eq!(
            build_note_off_transposed(2, 60, 64, -2).as_bytes(),
            &[0x81, 36, 64]
        );
        // Shifting below zero wraps to the low byte, like the masking builders.
        assert_eq!(build_note_on_transposed(1, 60, 100, -6).note_number(), 244);
    }

    #[test]
    fn test_transposed_extract_inverts_build() {
        let message = build_note_on_transposed(1, 60, 100, 2);
        assert_eq!(message.note_number(), 84);
        assert_eq!(message.note_number_transposed(2), 60);
    }

    #[test]
    fn test_note_on_from_bytes() {
        let built = build_note_on(3, 72, 90);
        let parsed = NoteOn::from_bytes(built.as_bytes()).unwrap();
        assert_eq!(parsed.channel(), 3);
        assert_eq!(parsed.note_number(), 72);
        assert_eq!(parsed.velocity(), 90);

        assert_eq!(
            NoteOn::from_bytes(&[0xB0, 7, 100]),
            Err(Error::KindMismatch {
                expected: "note on",
                status: 0xB0
            })
        );
        assert_eq!(
            NoteOn::from_bytes(&[0x90, 60]),
            Err(Error::TooShort {
                kind: "note on",
                expected: 3,
                actual: 2
            })
        );
        // The velocity-0 form belongs to NoteOff.
        assert!(NoteOn::from_bytes(&[0x90, 60, 0]).is_err());
    }

    #[test]
    fn test_note_off_from_bytes_accepts_both_forms() {
        let explicit = NoteOff::from_bytes(&[0x80, 60, 0]).unwrap();
        assert_eq!(explicit.note_number(), 60);

        let zero_velocity = NoteOff::from_bytes(&[0x90, 60, 0]).unwrap();
        assert_eq!(zero_velocity.note_number(), 60);
        assert_eq!(zero_velocity.velocity(), 0);

        assert!(NoteOff::from_bytes(&[0x90, 60, 1]).is_err());
        assert_eq!(NoteOff::from_bytes(&[]), Err(Error::EmptyMessage));
    }

    #[test]
    fn test_builders_are_pure() {
        assert_eq!(build_note_on(5, 64, 101), build_note_on(5, 64, 101));
    }

    #[test]
    fn test_note_number_display() {
        let c4 = NoteNumber::new(60);
        assert_eq!(c4.octave(), 4);
        assert_eq!(c4.name(), "C");
        assert_eq!(c4.to_string(), "C4");
        assert_eq!(NoteNumber::new(69).to_string(), "A4");
        assert_eq!(NoteNumber::new(0).to_string(), "C-1");
    }
}
