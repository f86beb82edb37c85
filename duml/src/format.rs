//! Human-readable packet renderings
//!
//! Both forms read public fields only.

use duml_core::Packet;
use duml_types::{command_label, AckType, CommandType, DeviceType, EncryptionType, SetType};

const UNKNOWN: &str = "UNKNOWN";

/// Text renderings for [`Packet`]
pub trait PacketExt {
    /// One line, easy to grep
    fn to_short_string(&self) -> String;

    /// One field per line
    fn to_long_string(&self) -> String;
}

impl PacketExt for Packet {
    fn to_short_string(&self) -> String {
        format!(
            "Source (0x{:x}), Ver (0x{:x}), Dest (0x{:x}), Sequence (0x{:x}), \
             Cmd Type (0x{:x}), Cmd SubType {} (0x{:x}), Cmd Payload {}",
            self.source_raw(),
            self.version(),
            self.destination_raw(),
            self.sequence_id(),
            self.command_type_raw(),
            sub_type(self),
            self.command(),
            payload(self),
        )
    }

    fn to_long_string(&self) -> String {
        let lines = [
            format!("Packet HEX({})", self.to_hex_string()),
            format!("Valid CRC:\t{}", self.is_valid()),
            format!("Version:\t0x{:x}", self.version()),
            format!("Length:\t\t{}\t(0x{:x})", self.length(), self.length()),
            format!("CRC Head:\t0x{:x}", self.header_checksum()),
            format!(
                "Source ID:\t{}, 0x{:x} (0x{:x})",
                label(DeviceType::label(self.source_type())),
                self.source_index(),
                self.source_raw()
            ),
            format!(
                "Dest ID:\t{}, 0x{:x} (0x{:x})",
                label(DeviceType::label(self.destination_type())),
                self.destination_index(),
                self.destination_raw()
            ),
            format!("Sequence ID:\t0x{:x}", self.sequence_id()),
            format!("Cmd Type (raw):\t0x{:x}", self.command_type_raw()),
            format!(
                "Cmd Type:\t{}\t(0x{:x})",
                label(CommandType::label(self.command_type())),
                self.command_type()
            ),
            format!(
                "Ack Type:\t{}\t(0x{:x})",
                label(AckType::label(self.ack_type())),
                self.ack_type()
            ),
            format!(
                "Encryption:\t{}\t(0x{:x})",
                label(EncryptionType::label(self.encryption_type())),
                self.encryption_type()
            ),
            format!(
                "Cmd Set:\t{}\t(0x{:x})",
                label(SetType::label(self.command_set())),
                self.command_set()
            ),
            format!("Cmd SubType:\t{} (0x{:x})", sub_type(self), self.command()),
            format!("Cmd Payload:\t{}", payload(self)),
            format!("CRC16:\t\t0x{:x}", self.checksum()),
        ];

        lines.join("\n")
    }
}

fn label(name: Option<&'static str>) -> &'static str {
    name.unwrap_or(UNKNOWN)
}

fn sub_type(packet: &Packet) -> &'static str {
    label(command_label(packet.command_set(), packet.command()))
}

fn payload(packet: &Packet) -> String {
    let payload = packet.command_payload();
    if payload.is_empty() {
        "NULL".to_string()
    } else {
        format!("(0x{})", hex::encode(&payload))
    }
}
