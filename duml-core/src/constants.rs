//! Protocol constants

/// First byte of every frame
pub const MAGIC: u8 = 0x55;

/// Bytes before the payload: magic through opcode
pub const HEADER_LEN: usize = 11;

/// Trailing whole-packet checksum
pub const CHECKSUM_LEN: usize = 2;

/// Smallest frame: header + checksum, empty payload
pub const MIN_FRAME_LEN: usize = HEADER_LEN + CHECKSUM_LEN;

/// Largest value the 10-bit length field can carry
pub const MAX_FRAME_LEN: usize = 0x3FF;

/// Largest payload that still fits in `MAX_FRAME_LEN`
pub const MAX_PAYLOAD_LEN: usize = MAX_FRAME_LEN - MIN_FRAME_LEN;

/// Version written when a field-set does not name one
pub const DEFAULT_VERSION: u8 = 1;

/// Version occupies the high 6 bits of the version/length word
pub const VERSION_MASK: u8 = 0x3F;

/// Length occupies the low 10 bits of the version/length word
pub const LENGTH_MASK: u16 = 0x03FF;

/// Byte offsets within a frame
pub mod offsets {
    pub const MAGIC: usize = 0;
    pub const VERSION_LENGTH: usize = 1;
    pub const HEADER_CHECKSUM: usize = 3;
    pub const SOURCE: usize = 4;
    pub const DESTINATION: usize = 5;
    pub const SEQUENCE: usize = 6;
    pub const COMMAND_TYPE: usize = 8;
    pub const COMMAND_SET: usize = 9;
    pub const COMMAND: usize = 10;
    pub const PAYLOAD: usize = 11;
}

/// Checksum seeds
pub mod seeds {
    /// CRC-8 initial value over the 3-byte header prefix
    pub const CRC8: u8 = 0x77;

    /// CRC-16 initial value over the whole frame minus its trailer
    pub const CRC16: u16 = 0x3692;
}
