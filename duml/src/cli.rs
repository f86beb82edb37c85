//! Command-line interface for the `duml` tool

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use duml_core::{Mode, Packet};

use crate::{error::Result, format::PacketExt};

/// duml - decode and print DUML packets
#[derive(Parser, Debug)]
#[command(name = "duml", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a DUML packet buffer in short form
    Print(PacketArgs),

    /// Print a DUML packet buffer in long form
    PrettyPrint(PacketArgs),
}

#[derive(Args, Debug)]
pub struct PacketArgs {
    /// Packet bytes as a hex string
    pub buffer: String,

    /// Decode without automatic recalculation
    #[arg(long)]
    pub frozen: bool,
}

impl PacketArgs {
    /// Decode the hex argument
    pub fn packet(&self) -> Result<Packet> {
        let mode = if self.frozen { Mode::Frozen } else { Mode::Auto };
        debug!(?mode, len = self.buffer.len(), "Decoding packet argument");
        Ok(Packet::from_hex_with_mode(&self.buffer, mode)?)
    }
}

impl Commands {
    /// Render the packet named by this command
    pub fn render(&self) -> Result<String> {
        match self {
            Self::Print(args) => Ok(args.packet()?.to_short_string()),
            Self::PrettyPrint(args) => Ok(args.packet()?.to_long_string()),
        }
    }
}
