//! Building packets from a field-set

use bytes::Bytes;
use rand::Rng;
use tracing::debug;

use crate::{
    bitfield, codec,
    constants::{DEFAULT_VERSION, MAX_PAYLOAD_LEN, MIN_FRAME_LEN, VERSION_MASK},
    error::{Error, Result},
    packet::{Mode, Packet},
};

/// Lowest sequence ID handed out by [`random_sequence_id`]
pub const MIN_RANDOM_SEQUENCE: u16 = 0x0001;

/// Highest sequence ID handed out by [`random_sequence_id`]
pub const MAX_RANDOM_SEQUENCE: u16 = 0xFFFE;

/// Draw a sequence ID in `1..=0xFFFE`
pub fn random_sequence_id<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.gen_range(MIN_RANDOM_SEQUENCE..=MAX_RANDOM_SEQUENCE)
}

/// Field-set for synthesizing a packet
///
/// Every field is optional. A raw address or command-type byte takes
/// precedence over its sub-fields. `length`, `header_checksum` and
/// `checksum` only matter in [`Mode::Frozen`]; `Auto` recomputes them.
///
/// # Examples
///
/// ```
/// use duml_core::{Packet, PacketFields};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let packet = Packet::new(
///     PacketFields {
///         source_raw: Some(0x2A),
///         destination_raw: Some(0x2D),
///         sequence_id: Some(0x1234),
///         command_type_raw: Some(0x40),
///         command: Some(0x32),
///         command_payload: Some(vec![0x11u8].into()),
///         ..Default::default()
///     },
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(packet.to_hex_string(), "550e04662a2d123440003211e1ad");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketFields {
    pub version: Option<u8>,
    pub length: Option<u16>,
    pub header_checksum: Option<u8>,

    pub source_raw: Option<u8>,
    pub source_type: Option<u8>,
    pub source_index: Option<u8>,

    pub destination_raw: Option<u8>,
    pub destination_type: Option<u8>,
    pub destination_index: Option<u8>,

    /// Drawn from the caller's random source when absent
    pub sequence_id: Option<u16>,

    pub command_type_raw: Option<u8>,
    pub command_type: Option<u8>,
    pub ack_type: Option<u8>,
    pub encryption_type: Option<u8>,

    pub command_set: Option<u8>,
    pub command: Option<u8>,
    pub command_payload: Option<Bytes>,

    pub checksum: Option<u16>,
}

impl Packet {
    /// Synthesize an auto-recalculating packet from a field-set
    ///
    /// `rng` is only consulted when no sequence ID is given.
    ///
    /// # Errors
    ///
    /// `PayloadTooLarge` if the payload cannot fit a 10-bit length.
    pub fn new<R: Rng + ?Sized>(fields: PacketFields, rng: &mut R) -> Result<Self> {
        Self::with_mode(fields, Mode::Auto, rng)
    }

    /// Synthesize a packet with an explicit recalculation mode
    ///
    /// In `Frozen` mode the caller's length and checksums are written as
    /// given; the buffer is exactly `length` bytes, zero-filled between the
    /// payload and the trailer.
    ///
    /// # Errors
    ///
    /// - `PayloadTooLarge` if the payload cannot fit a 10-bit length
    /// - `LengthOutOfRange` in `Frozen` mode when `length` cannot hold the
    ///   header, payload and trailer
    pub fn with_mode<R: Rng + ?Sized>(
        fields: PacketFields,
        mode: Mode,
        rng: &mut R,
    ) -> Result<Self> {
        let command_payload = fields.command_payload.unwrap_or_default();
        if command_payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                size: command_payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let (source_type, source_index) = match fields.source_raw {
            Some(raw) => bitfield::unpack_address(raw),
            None => (
                fields.source_type.unwrap_or(0) & bitfield::DEVICE_TYPE_MASK,
                fields.source_index.unwrap_or(0) & 0x07,
            ),
        };

        let (destination_type, destination_index) = match fields.destination_raw {
            Some(raw) => bitfield::unpack_address(raw),
            None => (
                fields.destination_type.unwrap_or(0) & bitfield::DEVICE_TYPE_MASK,
                fields.destination_index.unwrap_or(0) & 0x07,
            ),
        };

        let (command_type, ack_type, encryption_type) = match fields.command_type_raw {
            Some(raw) => bitfield::unpack_command_type(raw),
            None => (
                fields.command_type.unwrap_or(0) & 0x01,
                fields.ack_type.unwrap_or(0) & 0x03,
                fields.encryption_type.unwrap_or(0) & 0x0F,
            ),
        };

        let sequence_id = match fields.sequence_id {
            Some(id) => id,
            None => random_sequence_id(rng),
        };

        let length = fields
            .length
            .unwrap_or((MIN_FRAME_LEN + command_payload.len()) as u16);

        let mut packet = Packet {
            version: fields.version.unwrap_or(DEFAULT_VERSION) & VERSION_MASK,
            length,
            header_checksum: fields.header_checksum.unwrap_or(0),
            source_raw: bitfield::pack_address(source_type, source_index),
            source_type,
            source_index,
            destination_raw: bitfield::pack_address(destination_type, destination_index),
            destination_type,
            destination_index,
            sequence_id,
            command_type_raw: bitfield::pack_command_type(command_type, ack_type, encryption_type),
            command_type,
            ack_type,
            encryption_type,
            command_set: fields.command_set.unwrap_or(0),
            command: fields.command.unwrap_or(0),
            command_payload,
            checksum: fields.checksum.unwrap_or(0),
            raw: Bytes::new(),
            changed: false,
            mode,
        };

        match mode {
            Mode::Auto => codec::regenerate(&mut packet),
            Mode::Frozen => codec::layout_verbatim(&mut packet)?,
        }

        debug!(
            length = packet.length,
            sequence_id = packet.sequence_id,
            command_set = packet.command_set,
            command = packet.command,
            ?mode,
            "Synthesized packet"
        );

        Ok(packet)
    }

    /// Replace the sequence ID with a fresh random one
    pub fn randomize_sequence_id<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.set_sequence_id(random_sequence_id(rng));
    }
}
