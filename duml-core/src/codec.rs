//! Frame layout: buffer to fields and back

use byteorder::{ByteOrder, LittleEndian};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::{
    bitfield, checksum,
    constants::{
        offsets, CHECKSUM_LEN, LENGTH_MASK, MAGIC, MAX_FRAME_LEN, MAX_PAYLOAD_LEN, MIN_FRAME_LEN,
        VERSION_MASK,
    },
    error::{Error, Result},
    packet::{Mode, Packet},
};

const VERSION_SHIFT: u16 = 10;

/// Decode a frame from the start of `buf`
///
/// Bytes past the declared length are ignored. Checksums are taken as given.
pub fn decode(buf: &[u8], mode: Mode) -> Result<Packet> {
    if buf.len() < MIN_FRAME_LEN {
        return Err(Error::TooSmall {
            expected: MIN_FRAME_LEN,
            actual: buf.len(),
        });
    }

    if buf[offsets::MAGIC] != MAGIC {
        return Err(Error::BadMagic(buf[offsets::MAGIC]));
    }

    let word = LittleEndian::read_u16(&buf[offsets::VERSION_LENGTH..offsets::HEADER_CHECKSUM]);
    let version = (word >> VERSION_SHIFT) as u8;
    let length = word & LENGTH_MASK;
    let declared = length as usize;

    if declared > buf.len() {
        return Err(Error::LengthExceedsBuffer {
            declared,
            actual: buf.len(),
        });
    }

    if declared < MIN_FRAME_LEN {
        return Err(Error::LengthOutOfRange {
            declared,
            min: MIN_FRAME_LEN,
            max: MAX_FRAME_LEN,
        });
    }

    let frame = &buf[..declared];
    let mut cursor = &frame[offsets::HEADER_CHECKSUM..];

    let header_checksum = cursor.get_u8();
    let source_raw = cursor.get_u8();
    let destination_raw = cursor.get_u8();
    let sequence_id = cursor.get_u16();
    let command_type_raw = cursor.get_u8();
    let command_set = cursor.get_u8();
    let command = cursor.get_u8();
    let command_payload = cursor.copy_to_bytes(declared - MIN_FRAME_LEN);
    let checksum = cursor.get_u16_le();

    let (source_type, source_index) = bitfield::unpack_address(source_raw);
    let (destination_type, destination_index) = bitfield::unpack_address(destination_raw);
    let (command_type, ack_type, encryption_type) = bitfield::unpack_command_type(command_type_raw);

    debug!(
        length,
        trailing = buf.len() - declared,
        sequence_id,
        command_set,
        command,
        ?mode,
        "Decoded packet"
    );

    Ok(Packet {
        version,
        length,
        header_checksum,
        source_raw,
        source_type,
        source_index,
        destination_raw,
        destination_type,
        destination_index,
        sequence_id,
        command_type_raw,
        command_type,
        ack_type,
        encryption_type,
        command_set,
        command,
        command_payload,
        checksum,
        raw: Bytes::copy_from_slice(frame),
        changed: false,
        mode,
    })
}

/// Decode a frame from its hex representation
pub fn decode_hex(input: &str, mode: Mode) -> Result<Packet> {
    let bytes = hex::decode(input.trim())?;
    decode(&bytes, mode)
}

/// Serialized form of `packet`
pub fn encode(packet: &Packet) -> Bytes {
    packet.encode()
}

/// Compare stored checksums with ones recomputed from the serialized buffer
pub fn is_valid(packet: &Packet) -> bool {
    let raw = packet.raw();
    if raw.len() < MIN_FRAME_LEN {
        return false;
    }

    checksum::verify8(&raw[..offsets::HEADER_CHECKSUM], packet.header_checksum())
        && checksum::verify16(&raw[..raw.len() - CHECKSUM_LEN], packet.checksum())
}

/// Re-derive length, packed bytes and both checksums, then re-serialize
pub(crate) fn regenerate(packet: &mut Packet) {
    debug_assert!(packet.command_payload.len() <= MAX_PAYLOAD_LEN);

    packet.length = (MIN_FRAME_LEN + packet.command_payload.len()) as u16;
    write_frame(packet, true);
}

/// Serialize with the caller's length and checksums left as they are
pub(crate) fn layout_verbatim(packet: &mut Packet) -> Result<()> {
    let declared = packet.length as usize;
    let required = MIN_FRAME_LEN + packet.command_payload.len();

    if declared < required || declared > MAX_FRAME_LEN {
        return Err(Error::LengthOutOfRange {
            declared,
            min: required,
            max: MAX_FRAME_LEN,
        });
    }

    write_frame(packet, false);
    Ok(())
}

// Header checksum only sees magic + version/length; the trailer sees
// everything written before it.
fn write_frame(packet: &mut Packet, generate: bool) {
    let length = packet.length as usize;
    let mut buf = BytesMut::with_capacity(length);

    buf.put_u8(MAGIC);
    let version_length =
        (((packet.version & VERSION_MASK) as u16) << VERSION_SHIFT) | (packet.length & LENGTH_MASK);
    buf.put_u16_le(version_length);

    if generate {
        packet.header_checksum = checksum::checksum8(&buf);
    }
    buf.put_u8(packet.header_checksum);

    packet.source_raw = bitfield::pack_address(packet.source_type, packet.source_index);
    buf.put_u8(packet.source_raw);

    packet.destination_raw =
        bitfield::pack_address(packet.destination_type, packet.destination_index);
    buf.put_u8(packet.destination_raw);

    buf.put_u16(packet.sequence_id);

    packet.command_type_raw =
        bitfield::pack_command_type(packet.command_type, packet.ack_type, packet.encryption_type);
    buf.put_u8(packet.command_type_raw);
    buf.put_u8(packet.command_set);
    buf.put_u8(packet.command);
    buf.put_slice(&packet.command_payload);

    // Frozen layouts may declare more room than the payload needs
    buf.resize(length - CHECKSUM_LEN, 0);

    if generate {
        packet.checksum = checksum::checksum16(&buf);
    }
    buf.put_u16_le(packet.checksum);

    packet.raw = buf.freeze();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KNOWN_GOOD: &str = "550E04662A28DE2F40005B01A53A";

    #[test]
    fn test_decode_known_good() {
        let packet = decode_hex(KNOWN_GOOD, Mode::Auto).unwrap();

        assert_eq!(packet.version(), 1);
        assert_eq!(packet.length(), 0x0E);
        assert_eq!(packet.header_checksum(), 0x66);
        assert_eq!(packet.source_raw(), 0x2A);
        assert_eq!(packet.source_type(), 10);
        assert_eq!(packet.source_index(), 1);
        assert_eq!(packet.destination_raw(), 0x28);
        assert_eq!(packet.destination_type(), 8);
        assert_eq!(packet.destination_index(), 1);
        assert_eq!(packet.sequence_id(), 0xDE2F);
        assert_eq!(packet.command_type_raw(), 0x40);
        assert_eq!(packet.command_type(), 0);
        assert_eq!(packet.ack_type(), 2);
        assert_eq!(packet.encryption_type(), 0);
        assert_eq!(packet.command_set(), 0x00);
        assert_eq!(packet.command(), 0x5B);
        assert_eq!(packet.command_payload().as_ref(), &[0x01]);
        assert_eq!(packet.checksum(), 0x3AA5);
        assert!(is_valid(&packet));
        assert_eq!(encode(&packet).as_ref(), hex::decode(KNOWN_GOOD).unwrap().as_slice());
    }

    #[test]
    fn test_decode_too_small() {
        assert!(matches!(
            decode(&[], Mode::Auto),
            Err(Error::TooSmall { expected: 13, actual: 0 })
        ));
        assert!(matches!(
            decode(&[0x55, 0xD1, 0xFF], Mode::Auto),
            Err(Error::TooSmall { expected: 13, actual: 3 })
        ));
    }

    #[test]
    fn test_decode_bad_magic() {
        let result = decode_hex("56D1FFBEEFD1FFBEEFD1FFBEEF", Mode::Auto);
        assert!(matches!(result, Err(Error::BadMagic(0x56))));

        let result = decode_hex(
            "0b2a854d80003200000000000000000000000000000000000000000000000000003c7e",
            Mode::Auto,
        );
        assert!(matches!(result, Err(Error::BadMagic(0x0B))));
    }

    #[test]
    fn test_decode_length_exceeds_buffer() {
        let result = decode_hex("55D1FFBEEFD1FFBEEFD1FFBEEF", Mode::Auto);
        assert!(matches!(
            result,
            Err(Error::LengthExceedsBuffer { declared: 0x3D1, actual: 13 })
        ));
    }

    #[test]
    fn test_decode_length_below_minimum() {
        // length field 0x005 in an otherwise 13-byte buffer
        let result = decode_hex("55050400000000000000000000", Mode::Auto);
        assert!(matches!(
            result,
            Err(Error::LengthOutOfRange { declared: 5, .. })
        ));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let capture = "552c0436030a2b3f00000ec320203139303530205b442d4f53445d646973706c61795f6d6f646520360073e85528040d030a2c3f00000ea320203139303530205b442d52435d3120312028307c30297c30008128";
        let packet = decode_hex(capture, Mode::Auto).unwrap();

        assert_eq!(packet.length(), 0x2C);
        assert_eq!(packet.raw().len(), 0x2C);
        assert_eq!(packet.command(), 0x0E);
        assert_eq!(packet.command_set(), 0x00);
    }

    #[test]
    fn test_decode_minimum_frame() {
        let packet = decode_hex("550D04332A28DE2F40005B0BA3", Mode::Auto).unwrap();

        assert!(packet.command_payload().is_empty());
        assert_eq!(packet.checksum(), 0xA30B);
        assert!(is_valid(&packet));
    }

    #[test]
    fn test_malformed_hex() {
        assert!(matches!(decode_hex("550", Mode::Auto), Err(Error::MalformedHex(_))));
        assert!(matches!(decode_hex("zz0E", Mode::Auto), Err(Error::MalformedHex(_))));
    }

    #[test]
    fn test_is_valid_detects_corruption() {
        let mut bytes = hex::decode(KNOWN_GOOD).unwrap();
        bytes[11] ^= 0xFF;
        let packet = decode(&bytes, Mode::Auto).unwrap();

        assert!(!is_valid(&packet));
        assert!(!is_valid(&packet));
    }

    #[test]
    fn test_is_valid_detects_header_corruption() {
        let mut bytes = hex::decode(KNOWN_GOOD).unwrap();
        bytes[3] = 0x00;
        let packet = decode(&bytes, Mode::Auto).unwrap();

        assert!(!is_valid(&packet));
    }
}
