use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlindingError {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid scalar length: expected 32 or 64 bytes, got {0}")]
    InvalidScalarLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("unknown identifier prefix: {0:02x}")]
    UnknownPrefix(u8),

    #[error("unexpected identifier prefix: expected {expected:02x} got {got:02x}")]
    UnexpectedPrefix { expected: u8, got: u8 },

    #[error("invalid curve point: {0}")]
    InvalidPoint(&'static str),

    #[error("cannot invert the zero scalar")]
    ZeroScalar,
}
