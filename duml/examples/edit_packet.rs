//! Field editing example

use duml::{Mode, Packet, PacketExt, PacketFields};
use rand::SeedableRng;

fn main() -> duml::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let hex = std::env::var("DUML_PACKET")
        .unwrap_or_else(|_| "550E04662A28DE2F40005B01A53A".to_string());

    let mut packet = Packet::from_hex(&hex)?;
    println!("{}", packet.to_long_string());

    // Every write keeps length and checksums in step
    packet.set_source_index(2);
    packet.set_command_payload(vec![0x01u8, 0x02, 0x03])?;
    println!("\nEdited: {}", packet.to_short_string());
    println!("Valid: {}", packet.is_valid());

    // Frozen packets keep whatever checksum you give them
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let broken = Packet::with_mode(
        PacketFields {
            command: Some(0x00),
            checksum: Some(0xDEAD),
            length: Some(13),
            ..Default::default()
        },
        Mode::Frozen,
        &mut rng,
    )?;
    println!("\nFrozen: {} valid={}", broken.to_hex_string(), broken.is_valid());

    Ok(())
}
