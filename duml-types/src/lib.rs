//! Symbolic label tables for DUML field values
//!
//! These only name values for display. The codec itself works on raw `u8`s
//! and never rejects a value for being unlisted here.

#[macro_use]
mod macros;

pub mod command_type;
pub mod device;
pub mod error;
pub mod general;
pub mod set;
pub mod special;

pub use command_type::{AckType, CommandType, EncryptionType};
pub use device::DeviceType;
pub use error::{Error, Result};
pub use general::GeneralCommand;
pub use set::SetType;
pub use special::SpecialCommand;

/// Opcode label scoped by command set
///
/// Only the general and special sets have opcode tables.
pub fn command_label(command_set: u8, command: u8) -> Option<&'static str> {
    match SetType::try_from(command_set).ok()? {
        SetType::General => GeneralCommand::label(command),
        SetType::Special => SpecialCommand::label(command),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_label_scoped_by_set() {
        assert_eq!(command_label(0x00, 0x5B), Some("START_FTP"));
        assert_eq!(command_label(0x01, 0xFF), Some("UAV_LOOPBACK"));
        assert_eq!(command_label(0x00, 0xFF), Some("QUERY_DEVICE_INFO"));
        assert_eq!(command_label(0x03, 0x5B), None);
        assert_eq!(command_label(0x40, 0x00), None);
    }
}
