//! DUML packet structure and field mutation
//!
//! A [`Packet`] owns its serialized form. Fields are changed only through
//! setters; in [`Mode::Auto`] every write re-derives the packed bytes, the
//! length, both checksums and the buffer itself.

use bytes::Bytes;
use std::fmt;
use tracing::{debug, warn};

use crate::{
    bitfield, codec,
    constants::{LENGTH_MASK, MAX_PAYLOAD_LEN, VERSION_MASK},
    error::{Error, Result},
};

/// Recalculation behaviour chosen at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Every field write re-derives packed bytes, length, checksums and the
    /// serialized buffer
    #[default]
    Auto,

    /// Field writes are stored verbatim and the serialized buffer is left
    /// alone. Used to build deliberately malformed frames.
    Frozen,
}

impl Mode {
    /// Check if writes trigger recalculation
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// DUML packet
///
/// # Packet Structure
///
/// ```text
/// ┌───────┬──────────────┬──────┬─────┬─────┬──────────┬──────────┬─────┬────────┬─────────┬───────┐
/// │ Magic │ Ver/Length   │ CRC8 │ Src │ Dst │ Sequence │ Cmd Type │ Set │ Opcode │ Payload │ CRC16 │
/// │ 0x55  │ 2 bytes (LE) │  1   │  1  │  1  │ 2 (BE)   │    1     │  1  │   1    │ N bytes │ 2 (LE)│
/// └───────┴──────────────┴──────┴─────┴─────┴──────────┴──────────┴─────┴────────┴─────────┴───────┘
/// ```
///
/// # Examples
///
/// ```
/// use duml_core::Packet;
///
/// let mut packet = Packet::from_hex("550E04662A28DE2F40005B01A53A").unwrap();
/// assert!(packet.is_valid());
///
/// packet.set_source_index(2);
/// assert_eq!(packet.source_raw(), 0x4A);
/// assert_eq!(packet.to_hex_string(), "550e04664a28de2f40005b01a4e9");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Packet {
    pub(crate) version: u8,
    pub(crate) length: u16,
    pub(crate) header_checksum: u8,

    pub(crate) source_raw: u8,
    pub(crate) source_type: u8,
    pub(crate) source_index: u8,

    pub(crate) destination_raw: u8,
    pub(crate) destination_type: u8,
    pub(crate) destination_index: u8,

    pub(crate) sequence_id: u16,

    pub(crate) command_type_raw: u8,
    pub(crate) command_type: u8,
    pub(crate) ack_type: u8,
    pub(crate) encryption_type: u8,

    pub(crate) command_set: u8,
    pub(crate) command: u8,
    pub(crate) command_payload: Bytes,

    pub(crate) checksum: u16,

    pub(crate) raw: Bytes,
    pub(crate) changed: bool,
    pub(crate) mode: Mode,
}

impl Packet {
    /// Decode a packet from a buffer, auto-recalculating on later writes
    ///
    /// Checksums are not verified here; see [`Packet::is_valid`].
    ///
    /// # Errors
    ///
    /// - `TooSmall` if the buffer is shorter than 13 bytes
    /// - `BadMagic` if the first byte is not `0x55`
    /// - `LengthExceedsBuffer` if the declared length runs past the buffer
    /// - `LengthOutOfRange` if the declared length is below 13
    pub fn decode(buf: impl AsRef<[u8]>) -> Result<Self> {
        codec::decode(buf.as_ref(), Mode::Auto)
    }

    /// Decode a packet from a buffer with an explicit recalculation mode
    pub fn decode_with_mode(buf: impl AsRef<[u8]>, mode: Mode) -> Result<Self> {
        codec::decode(buf.as_ref(), mode)
    }

    /// Decode a packet from a hex string
    ///
    /// # Errors
    ///
    /// `MalformedHex` for odd-length or non-hex input, otherwise the same
    /// errors as [`Packet::decode`].
    pub fn from_hex(input: &str) -> Result<Self> {
        codec::decode_hex(input, Mode::Auto)
    }

    /// Decode a packet from a hex string with an explicit recalculation mode
    pub fn from_hex_with_mode(input: &str, mode: Mode) -> Result<Self> {
        codec::decode_hex(input, mode)
    }

    /// Check both checksums against the current serialized buffer
    pub fn is_valid(&self) -> bool {
        codec::is_valid(self)
    }

    /// Serialized form
    ///
    /// Cheap: the returned `Bytes` shares the packet's immutable storage.
    pub fn encode(&self) -> Bytes {
        self.raw.clone()
    }

    /// Borrow the serialized form
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Hex representation of the serialized form (lowercase)
    pub fn to_hex_string(&self) -> String {
        hex::encode(&self.raw)
    }

    /// Replacing the serialized buffer is never allowed
    ///
    /// Always fails with `ImmutableRawBuffer`, whatever the mode. Mutate the
    /// fields instead, or decode a new packet from the buffer.
    pub fn set_raw(&mut self, raw: impl Into<Bytes>) -> Result<()> {
        let raw = raw.into();
        warn!(
            attempted_len = raw.len(),
            current_len = self.raw.len(),
            "Rejected direct write to raw buffer"
        );
        Err(Error::ImmutableRawBuffer)
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Declared frame length
    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn header_checksum(&self) -> u8 {
        self.header_checksum
    }

    pub fn source_raw(&self) -> u8 {
        self.source_raw
    }

    pub fn source_type(&self) -> u8 {
        self.source_type
    }

    pub fn source_index(&self) -> u8 {
        self.source_index
    }

    pub fn destination_raw(&self) -> u8 {
        self.destination_raw
    }

    pub fn destination_type(&self) -> u8 {
        self.destination_type
    }

    pub fn destination_index(&self) -> u8 {
        self.destination_index
    }

    pub fn sequence_id(&self) -> u16 {
        self.sequence_id
    }

    pub fn command_type_raw(&self) -> u8 {
        self.command_type_raw
    }

    /// Direction bit: 0 request, 1 acknowledgement
    pub fn command_type(&self) -> u8 {
        self.command_type
    }

    pub fn ack_type(&self) -> u8 {
        self.ack_type
    }

    pub fn encryption_type(&self) -> u8 {
        self.encryption_type
    }

    pub fn command_set(&self) -> u8 {
        self.command_set
    }

    /// Opcode within the command set
    pub fn command(&self) -> u8 {
        self.command
    }

    /// Payload bytes; empty when the packet carries none
    pub fn command_payload(&self) -> Bytes {
        self.command_payload.clone()
    }

    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// True once any field was written after construction
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Set the 6-bit protocol version
    pub fn set_version(&mut self, version: u8) {
        self.write(|p| p.version = version & VERSION_MASK);
    }

    /// Set the declared length
    ///
    /// Recomputed from the payload in `Auto` mode.
    pub fn set_length(&mut self, length: u16) {
        self.write(|p| p.length = length & LENGTH_MASK);
    }

    /// Set the header checksum
    ///
    /// Recomputed in `Auto` mode.
    pub fn set_header_checksum(&mut self, header_checksum: u8) {
        self.write(|p| p.header_checksum = header_checksum);
    }

    /// Set the whole source address byte
    ///
    /// In `Auto` mode the device type and index are unpacked from it.
    pub fn set_source_raw(&mut self, source_raw: u8) {
        self.write(|p| {
            p.source_raw = source_raw;
            if p.mode.is_auto() {
                (p.source_type, p.source_index) = bitfield::unpack_address(source_raw);
            }
        });
    }

    /// Set the 5-bit source device type
    pub fn set_source_type(&mut self, device_type: u8) {
        self.write(|p| p.source_type = device_type & bitfield::DEVICE_TYPE_MASK);
    }

    /// Set the 3-bit source device index
    pub fn set_source_index(&mut self, index: u8) {
        self.write(|p| p.source_index = index & 0x07);
    }

    /// Set the whole destination address byte
    ///
    /// In `Auto` mode the device type and index are unpacked from it.
    pub fn set_destination_raw(&mut self, destination_raw: u8) {
        self.write(|p| {
            p.destination_raw = destination_raw;
            if p.mode.is_auto() {
                (p.destination_type, p.destination_index) =
                    bitfield::unpack_address(destination_raw);
            }
        });
    }

    /// Set the 5-bit destination device type
    pub fn set_destination_type(&mut self, device_type: u8) {
        self.write(|p| p.destination_type = device_type & bitfield::DEVICE_TYPE_MASK);
    }

    /// Set the 3-bit destination device index
    pub fn set_destination_index(&mut self, index: u8) {
        self.write(|p| p.destination_index = index & 0x07);
    }

    pub fn set_sequence_id(&mut self, sequence_id: u16) {
        self.write(|p| p.sequence_id = sequence_id);
    }

    /// Set the whole command-type byte
    ///
    /// In `Auto` mode the three sub-fields are unpacked from it and the
    /// reserved bit 4 is dropped on re-serialization.
    pub fn set_command_type_raw(&mut self, command_type_raw: u8) {
        self.write(|p| {
            p.command_type_raw = command_type_raw;
            if p.mode.is_auto() {
                (p.command_type, p.ack_type, p.encryption_type) =
                    bitfield::unpack_command_type(command_type_raw);
            }
        });
    }

    /// Set the direction bit
    pub fn set_command_type(&mut self, command_type: u8) {
        self.write(|p| p.command_type = command_type & 0x01);
    }

    /// Set the 2-bit acknowledgement kind
    pub fn set_ack_type(&mut self, ack_type: u8) {
        self.write(|p| p.ack_type = ack_type & 0x03);
    }

    /// Set the 4-bit encryption kind (descriptive only, nothing is encrypted)
    pub fn set_encryption_type(&mut self, encryption_type: u8) {
        self.write(|p| p.encryption_type = encryption_type & 0x0F);
    }

    pub fn set_command_set(&mut self, command_set: u8) {
        self.write(|p| p.command_set = command_set);
    }

    pub fn set_command(&mut self, command: u8) {
        self.write(|p| p.command = command);
    }

    /// Replace the payload
    ///
    /// The packet keeps its own copy; editing a payload in place is not
    /// supported, assign a new one instead.
    ///
    /// # Errors
    ///
    /// `PayloadTooLarge` if the payload would push the frame past the
    /// 10-bit length limit. The packet is left untouched.
    pub fn set_command_payload(&mut self, payload: impl Into<Bytes>) -> Result<()> {
        let payload = payload.into();
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        self.write(|p| p.command_payload = payload);
        Ok(())
    }

    /// Remove the payload; identical to setting an empty one
    pub fn clear_command_payload(&mut self) {
        self.write(|p| p.command_payload = Bytes::new());
    }

    /// Set the whole-packet checksum
    ///
    /// Recomputed in `Auto` mode.
    pub fn set_checksum(&mut self, checksum: u16) {
        self.write(|p| p.checksum = checksum);
    }

    /// Apply one field write, then re-derive everything else if enabled
    fn write(&mut self, update: impl FnOnce(&mut Self)) {
        update(self);
        self.changed = true;

        if self.mode.is_auto() {
            self.recalculate();
        }
    }

    /// Rebuild packed bytes, length, checksums and the serialized buffer
    pub(crate) fn recalculate(&mut self) {
        codec::regenerate(self);

        debug!(
            length = self.length,
            sequence_id = self.sequence_id,
            header_checksum = format!("0x{:02X}", self.header_checksum),
            checksum = format!("0x{:04X}", self.checksum),
            "Recalculated packet"
        );
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("version", &self.version)
            .field("length", &self.length)
            .field("header_checksum", &format!("0x{:02X}", self.header_checksum))
            .field("source", &format!("0x{:02X}", self.source_raw))
            .field("destination", &format!("0x{:02X}", self.destination_raw))
            .field("sequence_id", &format!("0x{:04X}", self.sequence_id))
            .field("command_type", &format!("0x{:02X}", self.command_type_raw))
            .field("command_set", &format!("0x{:02X}", self.command_set))
            .field("command", &format!("0x{:02X}", self.command))
            .field("payload_len", &self.command_payload.len())
            .field("checksum", &format!("0x{:04X}", self.checksum))
            .field("mode", &self.mode)
            .field("changed", &self.changed)
            .finish()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Packet[0x{:02X}:0x{:02X}](seq=0x{:04X}, src=0x{:02X}, dst=0x{:02X}, len={})",
            self.command_set,
            self.command,
            self.sequence_id,
            self.source_raw,
            self.destination_raw,
            self.length
        )
    }
}
