//! Serde support for wire messages.
//!
//! [`MidiMessage`] serializes as its plain byte sequence, so a note on
//! renders as `[144, 60, 127]` in JSON rather than an internal struct.
//! Deserialization runs through [`MidiMessage::from_bytes`] and therefore
//! enforces the 1-3 byte wire shape.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::message::MidiMessage;

impl Serialize for MidiMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_bytes())
    }
}

impl<'de> Deserialize<'de> for MidiMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        MidiMessage::from_bytes(&bytes).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::message::{MessageKind, MidiMessage};
    use crate::note::build_note_on;

    #[test]
    fn test_message_serializes_as_bytes() {
        let message = MidiMessage::from(build_note_on(1, 60, 127));
        assert_eq!(serde_json::to_string(&message).unwrap(), "[144,60,127]");
    }

    #[test]
    fn test_message_round_trip() {
        let message = MidiMessage::from_bytes(&[192, 5]).unwrap();
        let json = serde_json::to_string(&message).unwrap();
        let back: MidiMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
        assert_eq!(back.as_bytes(), &[192, 5]);
    }

    #[test]
    fn test_deserialize_enforces_wire_shape() {
        assert!(serde_json::from_str::<MidiMessage>("[]").is_err());
        assert!(serde_json::from_str::<MidiMessage>("[240,1,2,247]").is_err());
        assert!(serde_json::from_str::<MidiMessage>("[250]").is_ok());
    }

    #[test]
    fn test_kind_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&MessageKind::NoteOn).unwrap(),
            "\"NoteOn\""
        );
        let kind: MessageKind = serde_json::from_str("\"OtherSystem\"").unwrap();
        assert_eq!(kind, MessageKind::OtherSystem);
    }
}
