//! # duml-core
//!
//! Core codec for the DUML fixed-framing binary message format.
//!
//! This crate provides the low-level protocol primitives:
//! - Header (CRC-8) and whole-packet (CRC-16) checksums
//! - Address and command-type bitfield packing
//! - Frame decoding and encoding
//! - A packet type that keeps its fields and serialized form consistent
//!   as fields are edited
//!
//! ```
//! use duml_core::Packet;
//!
//! let mut packet = Packet::from_hex("550E04662A28DE2F40005B01A53A")?;
//! assert!(packet.is_valid());
//!
//! packet.set_command_payload(vec![0x01u8, 0x02, 0x03])?;
//! assert_eq!(packet.length(), 16);
//! assert!(packet.is_valid());
//! # Ok::<(), duml_core::Error>(())
//! ```

pub mod bitfield;
pub mod checksum;
pub mod codec;
pub mod constants;
pub mod error;
pub mod fields;
pub mod packet;

pub use error::{Error, Result};
pub use fields::{random_sequence_id, PacketFields};
pub use packet::{Mode, Packet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
