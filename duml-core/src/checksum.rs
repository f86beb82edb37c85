//! DUML checksum algorithms
//!
//! Two reflected, table-driven CRCs guard every frame:
//! 1. CRC-8 (polynomial 0x31, reflected 0x8C, seed 0x77) over the 3-byte
//!    magic/version/length prefix
//! 2. CRC-16 (polynomial 0x1021, reflected 0x8408, seed 0x3692) over the
//!    whole frame except its 2-byte trailer
//!
//! Neither applies a final XOR.

use tracing::trace;

use crate::constants::seeds;

const CRC8_POLY_REFLECTED: u8 = 0x8C;
const CRC16_POLY_REFLECTED: u16 = 0x8408;

static CRC8_TABLE: [u8; 256] = crc8_table();
static CRC16_TABLE: [u16; 256] = crc16_table();

const fn crc8_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ CRC8_POLY_REFLECTED
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

const fn crc16_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u16;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ CRC16_POLY_REFLECTED
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Calculate the 8-bit header checksum
///
/// Accepts any length, but the protocol only ever feeds it `raw[0..3]`.
///
/// # Examples
///
/// ```
/// use duml_core::checksum;
///
/// assert_eq!(checksum::checksum8(&[0x55, 0x0E, 0x04]), 0x66);
/// ```
pub fn checksum8(data: &[u8]) -> u8 {
    let crc = data.iter().fold(seeds::CRC8, |crc, &byte| {
        CRC8_TABLE[(crc ^ byte) as usize]
    });

    trace!(
        len = data.len(),
        checksum = format!("0x{:02X}", crc),
        "Calculated header checksum"
    );

    crc
}

/// Calculate the 16-bit whole-packet checksum
///
/// # Examples
///
/// ```
/// use duml_core::checksum;
///
/// let frame = [0x55, 0x0E, 0x04, 0x66, 0x2A, 0x28, 0xDE, 0x2F, 0x40, 0x00, 0x5B, 0x01];
/// assert_eq!(checksum::checksum16(&frame), 0x3AA5);
/// ```
pub fn checksum16(data: &[u8]) -> u16 {
    let crc = data.iter().fold(seeds::CRC16, |crc, &byte| {
        (crc >> 8) ^ CRC16_TABLE[((crc ^ byte as u16) & 0xFF) as usize]
    });

    trace!(
        len = data.len(),
        checksum = format!("0x{:04X}", crc),
        "Calculated packet checksum"
    );

    crc
}

/// Verify a header checksum
pub fn verify8(data: &[u8], expected: u8) -> bool {
    checksum8(data) == expected
}

/// Verify a whole-packet checksum
pub fn verify16(data: &[u8], expected: u16) -> bool {
    checksum16(data) == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Bitwise reference used to cross-check the tables
    fn crc16_bitwise(data: &[u8]) -> u16 {
        let mut crc = seeds::CRC16;
        for &byte in data {
            crc ^= byte as u16;
            for _ in 0..8 {
                crc = if crc & 1 != 0 { (crc >> 1) ^ CRC16_POLY_REFLECTED } else { crc >> 1 };
            }
        }
        crc
    }

    #[test]
    fn test_checksum8_empty_is_seed() {
        assert_eq!(checksum8(&[]), 0x77);
    }

    #[test]
    fn test_checksum16_empty_is_seed() {
        assert_eq!(checksum16(&[]), 0x3692);
    }

    #[test]
    fn test_check_strings() {
        assert_eq!(checksum8(b"123456789"), 0xFB);
        assert_eq!(checksum16(b"123456789"), 0x7109);
    }

    #[test]
    fn test_header_vectors() {
        assert_eq!(checksum8(&[0x55, 0x0E, 0x04]), 0x66);
        assert_eq!(checksum8(&[0x55, 0x0D, 0x04]), 0x33);
        assert_eq!(checksum8(&[0x55, 0x10, 0x04]), 0x56);
    }

    #[test]
    fn test_packet_vectors() {
        let frame = hex::decode("550E04664A28DE2F40005B01").unwrap();
        assert_eq!(checksum16(&frame), 0xE9A4);

        let frame = hex::decode("550D04332A28DE2F40005B").unwrap();
        assert_eq!(checksum16(&frame), 0xA30B);
    }

    #[test]
    fn test_verify() {
        assert!(verify8(&[0x55, 0x0E, 0x04], 0x66));
        assert!(!verify8(&[0x55, 0x0E, 0x04], 0x67));
        assert!(verify16(b"123456789", 0x7109));
        assert!(!verify16(b"123456789", 0x7108));
    }

    #[test]
    fn test_table_first_entries() {
        assert_eq!(CRC8_TABLE[0], 0x00);
        assert_eq!(CRC8_TABLE[1], 0x5E);
        assert_eq!(CRC16_TABLE[0], 0x0000);
        assert_eq!(CRC16_TABLE[1], 0x1189);
    }

    proptest! {
        #[test]
        fn prop_checksum16_matches_bitwise(data in prop::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(checksum16(&data), crc16_bitwise(&data));
        }

        #[test]
        fn prop_checksums_are_deterministic(data in prop::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(checksum8(&data), checksum8(&data));
            prop_assert_eq!(checksum16(&data), checksum16(&data));
        }
    }
}
