//! Sub-field packing for the address and command-type bytes
//!
//! ```text
//! address byte:       7 6 5 | 4 3 2 1 0
//!                     index | device type
//!
//! command-type byte:  7         | 6 5 | 4        | 3 2 1 0
//!                     direction | ack | reserved | encryption
//! ```
//!
//! Inputs wider than their slot are a caller error. They are caught by
//! `debug_assert!` in debug builds and otherwise bleed into neighbouring bits.

/// Low 5 bits of an address byte
pub const DEVICE_TYPE_MASK: u8 = 0x1F;

/// High 3 bits of an address byte
pub const DEVICE_INDEX_MASK: u8 = 0xE0;

const DEVICE_INDEX_SHIFT: u8 = 5;

const DIRECTION_SHIFT: u8 = 7;
const ACK_SHIFT: u8 = 5;
const ACK_MASK: u8 = 0x03;
const ENCRYPTION_MASK: u8 = 0x0F;

/// Pack a device type and index into an address byte
///
/// # Examples
///
/// ```
/// use duml_core::bitfield;
///
/// assert_eq!(bitfield::pack_address(10, 1), 0x2A);
/// ```
pub fn pack_address(device_type: u8, index: u8) -> u8 {
    debug_assert!(device_type <= DEVICE_TYPE_MASK, "device type {device_type} exceeds 5 bits");
    debug_assert!(index <= 0x07, "device index {index} exceeds 3 bits");

    device_type | (index << DEVICE_INDEX_SHIFT)
}

/// Split an address byte into `(device_type, index)`
pub fn unpack_address(byte: u8) -> (u8, u8) {
    (
        byte & DEVICE_TYPE_MASK,
        (byte & DEVICE_INDEX_MASK) >> DEVICE_INDEX_SHIFT,
    )
}

/// Pack direction, acknowledgement kind and encryption kind into a
/// command-type byte
///
/// # Examples
///
/// ```
/// use duml_core::bitfield;
///
/// // request, ack required, no encryption
/// assert_eq!(bitfield::pack_command_type(0, 2, 0), 0x40);
/// ```
pub fn pack_command_type(direction: u8, ack: u8, encryption: u8) -> u8 {
    debug_assert!(direction <= 1, "direction {direction} exceeds 1 bit");
    debug_assert!(ack <= ACK_MASK, "ack type {ack} exceeds 2 bits");
    debug_assert!(encryption <= ENCRYPTION_MASK, "encryption type {encryption} exceeds 4 bits");

    (direction << DIRECTION_SHIFT) | (ack << ACK_SHIFT) | encryption
}

/// Split a command-type byte into `(direction, ack, encryption)`
///
/// Bit 4 is reserved and not reported.
pub fn unpack_command_type(byte: u8) -> (u8, u8, u8) {
    (
        byte >> DIRECTION_SHIFT,
        (byte >> ACK_SHIFT) & ACK_MASK,
        byte & ENCRYPTION_MASK,
    )
}
