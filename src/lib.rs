//! Allocation-light codec for MIDI 1.0 wire messages.
//!
//! Classifies raw bytes observed on a port into semantic message kinds and
//! builds valid byte sequences from semantic parameters. No transport, no
//! device handling: bytes in, bytes out.
//!
//! Channels are numbered 1-16 everywhere in this API, as musicians name
//! them; the 0-15 nibble packing is internal to the wire format. Builders
//! never fail: out-of-range input masks to wire width so a send path cannot
//! error mid-stream.
//!
//! Producing a message:
//!
//! ```
//! use midi_wire::build_note_on;
//!
//! let message = build_note_on(1, 60, 127);
//! assert_eq!(message.as_bytes(), &[0x90, 0x3C, 0x7F]);
//! ```
//!
//! Consuming raw bytes:
//!
//! ```
//! use midi_wire::{MessageKind, NoteOn};
//!
//! let data: &[u8] = &[144, 60, 127];
//! match MessageKind::of(data) {
//!     Some(MessageKind::NoteOn) => {
//!         let note_on = NoteOn::from_bytes(data)?;
//!         assert_eq!(note_on.channel(), 1);
//!         assert_eq!(note_on.note().to_string(), "C4");
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), midi_wire::Error>(())
//! ```

pub mod error;
pub mod message;
pub mod note;
mod serde_support;
pub mod system;
pub mod voice;

pub use error::{Error, Result};
pub use message::{
    channel_nibble, channel_of, is_channel_message, is_system_message, mask_to_byte, MessageKind,
    MidiMessage, CHANNEL_MASK, STATUS_MASK,
};
pub use note::{
    build_note_off, build_note_off_transposed, build_note_on, build_note_on_transposed,
    is_note_off, is_note_on, NoteNumber, NoteOff, NoteOn, NOTE_OFF, NOTE_ON,
};
pub use system::{
    build_continue, build_start, build_stop, is_continue, is_start, is_stop, Continue, Start,
    Stop, CONTINUE, START, STOP,
};
pub use voice::{
    build_channel_aftertouch, build_control_change, build_pitch_bend,
    build_polyphonic_aftertouch, build_program_change, is_channel_aftertouch, is_control_change,
    is_pitch_bend, is_polyphonic_aftertouch, is_program_change, ChannelAftertouch, ControlChange,
    PitchBend, PolyphonicAftertouch, ProgramChange, CHANNEL_AFTERTOUCH, CONTROL_CHANGE,
    PITCH_BEND, PITCH_BEND_CENTER, POLYPHONIC_AFTERTOUCH, PROGRAM_CHANGE,
};
