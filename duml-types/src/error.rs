pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown {kind} value: 0x{value:02X}")]
    UnknownValue {
        kind: &'static str,
        value: u8,
    },
}
