//! Scalar arithmetic modulo the Edwards group order ℓ.
//!
//! Scalars here are fully reduced integers, never clamped X25519-style
//! private keys.

use curve25519_dalek::Scalar;
use crate::{errors::BlindingError, types::{BLAKE2B_WIDE_LEN, KEY_LEN}};

/// Reduce a 64-byte little-endian integer modulo ℓ.
#[inline]
#[must_use]
pub fn reduce_wide(bytes: &[u8; BLAKE2B_WIDE_LEN]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(bytes)
}

/// Reduce a little-endian integer modulo ℓ. Accepts wide (64-byte) hash
/// output or a 32-byte value.
///
/// # Errors
///
/// Returns `BlindingError::InvalidScalarLength` for any other input length.
pub fn reduce_scalar(bytes: &[u8]) -> Result<Scalar, BlindingError> {
    match bytes.len() {
        BLAKE2B_WIDE_LEN => {
            let mut wide = [0u8; BLAKE2B_WIDE_LEN];
            wide.copy_from_slice(bytes);
            Ok(reduce_wide(&wide))
        }
        KEY_LEN => {
            let mut narrow = [0u8; KEY_LEN];
            narrow.copy_from_slice(bytes);
            Ok(Scalar::from_bytes_mod_order(narrow))
        }
        got => Err(BlindingError::InvalidScalarLength(got)),
    }
}

/// s⁻¹ mod ℓ.
///
/// # Errors
///
/// Returns `BlindingError::ZeroScalar` when `s ≡ 0 (mod ℓ)`. Hash-derived
/// blinding factors never hit this; seeing it means the caller fed a
/// degenerate scalar.
pub fn invert_scalar(s: &Scalar) -> Result<Scalar, BlindingError> {
    if *s == Scalar::ZERO {
        return Err(BlindingError::ZeroScalar);
    }
    Ok(s.invert())
}
