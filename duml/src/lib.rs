//! # duml
//!
//! Rust implementation of the DUML packet format used on command/telemetry
//! links between addressable devices.
//!
//! ## Features
//!
//! - Decode and encode frames with header and whole-packet checksums
//! - Edit fields while length, packed bytes and checksums follow along
//! - Frozen mode for building deliberately malformed frames
//! - Labelled short and long renderings
//!
//! ## Quick Start
//!
//! ```
//! use duml::{Packet, PacketExt};
//!
//! let mut packet = Packet::from_hex("550E04662A28DE2F40005B01A53A")?;
//! println!("{}", packet.to_long_string());
//!
//! packet.set_source_index(2);
//! assert_eq!(packet.to_hex_string(), "550e04664a28de2f40005b01a4e9");
//! # Ok::<(), duml::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod format;
pub mod logging;

// Re-exports
pub use error::{Error, Result};
pub use format::PacketExt;

// Re-export core and types
pub use duml_core::{checksum, bitfield, codec, constants, Mode, Packet, PacketFields};
pub use duml_types::{
    AckType, CommandType, DeviceType, EncryptionType, GeneralCommand, SetType, SpecialCommand,
};
