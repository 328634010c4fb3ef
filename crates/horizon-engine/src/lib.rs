pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Raised when a block is built with a color that is not in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid color index {index}")]
pub struct InvalidColorError {
    pub index: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed: expected 32 hex characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid seed: {_0} is not a hex string")]
    InvalidHex(#[error(not(source))] String),
}
