//! Shared constants and the workspace error type.

#![no_std]
#[cfg(feature = "std")]
extern crate std;

/// Rijndael reduction polynomial: x^8 + x^4 + x^3 + x + 1.
pub const REDUCTION_POLY: u16 = 0x11B;

/// Additive constant of the S-box affine step.
pub const AFFINE_CONST: u8 = 0x63;

/// Generator of the multiplicative group (x + 1). Spans all 255 nonzero
/// elements, which is what makes the log/antilog tables total.
pub const GENERATOR: u8 = 0x03;

/// Multipliers that get a dedicated 256-entry product table: 2 and 3 for
/// column mixing, 9/11/13/14 for its inverse and the key schedule.
pub const MUL_CONSTANTS: [u8; 6] = [2, 3, 9, 11, 13, 14];

/// Round constants emitted by the generator. 14 covers the key expansion
/// of every AES key size.
pub const RCON_ROUNDS: usize = 14;

pub type RijnResult<T> = Result<T, RijnError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RijnError {
    /// Creating, writing or renaming an output artifact failed.
    Io,
    /// Formatting into an in-memory buffer failed.
    Fmt,
}

impl core::fmt::Display for RijnError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<core::fmt::Error> for RijnError {
    fn from(_: core::fmt::Error) -> Self {
        RijnError::Fmt
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RijnError {}
