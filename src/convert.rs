//! Birational maps between Montgomery u-coordinates and Edwards encodings.
//!
//! The Montgomery form is x-only, so the Edwards sign bit is lost going one
//! way and ignored coming back.

use curve25519_dalek::{edwards::CompressedEdwardsY, montgomery::MontgomeryPoint, EdwardsPoint};
use ed25519_dalek::VerifyingKey;
use crate::{errors::BlindingError, types::{Ed25519Pk, SessionId, KEY_LEN}};

/// Edwards point for a Montgomery u-coordinate, taking the even-x (sign 0) root.
pub(crate) fn edwards_point(u: &[u8; KEY_LEN]) -> Result<EdwardsPoint, BlindingError> {
    MontgomeryPoint(*u)
        .to_edwards(0)
        .ok_or(BlindingError::InvalidPoint("montgomery u has no edwards image"))
}

/// Decompress a 32-byte Edwards encoding.
pub(crate) fn decompress(bytes: &[u8; KEY_LEN], what: &'static str) -> Result<EdwardsPoint, BlindingError> {
    CompressedEdwardsY(*bytes).decompress().ok_or(BlindingError::InvalidPoint(what))
}

/// Reject points outside the prime-order subgroup, the identity included.
/// Scalars are reduced mod ℓ, so only these points blind and unblind exactly.
pub(crate) fn require_prime_order(point: EdwardsPoint, what: &'static str) -> Result<EdwardsPoint, BlindingError> {
    if point.is_small_order() || !point.is_torsion_free() {
        return Err(BlindingError::InvalidPoint(what));
    }
    Ok(point)
}

/// Edwards point of a Session ID that can be blinded: a canonical `u` on the
/// curve whose point lies in the prime-order subgroup.
pub(crate) fn blindable_point(u: &[u8; KEY_LEN]) -> Result<EdwardsPoint, BlindingError> {
    let point = require_prime_order(edwards_point(u)?, "session id is not in the prime-order subgroup")?;
    if point.to_montgomery().to_bytes() != *u {
        return Err(BlindingError::InvalidPoint("session id is not canonically encoded"));
    }
    Ok(point)
}

/// y = (u − 1)·(u + 1)⁻¹ mod p, encoded with the sign bit cleared.
///
/// Unlike the bare formula, this is not total: `u` must name a point on
/// Curve25519. Twist points and `u = −1` produce a `y` with no Edwards point
/// behind it and are refused. Subgroup membership is not checked here.
///
/// # Errors
///
/// Returns `BlindingError::InvalidPoint` when `u = −1` or `u` lies on the
/// quadratic twist rather than the curve.
pub fn montgomery_to_edwards(u: &[u8; KEY_LEN]) -> Result<[u8; KEY_LEN], BlindingError> {
    let y = edwards_point(u)?.compress().to_bytes();
    tracing::trace!(u = %hex::encode(u), y = %hex::encode(y), "montgomery -> edwards");
    Ok(y)
}

/// u = (1 + y)·(1 − y)⁻¹ mod p for a compressed Edwards point. The sign bit
/// is read, then dropped by the map.
///
/// # Errors
///
/// Returns `BlindingError::InvalidPoint` if `point` does not decompress.
pub fn edwards_to_montgomery(point: &[u8; KEY_LEN]) -> Result<[u8; KEY_LEN], BlindingError> {
    let u = decompress(point, "edwards encoding does not decompress")?
        .to_montgomery()
        .to_bytes();
    tracing::trace!(y = %hex::encode(point), u = %hex::encode(u), "edwards -> montgomery");
    Ok(u)
}

impl SessionId {
    /// Edwards form of this Session ID (sign bit 0).
    ///
    /// # Errors
    ///
    /// See [`montgomery_to_edwards`].
    pub fn to_ed25519(&self) -> Result<Ed25519Pk, BlindingError> {
        montgomery_to_edwards(&self.0).map(Ed25519Pk)
    }

    /// Session ID belonging to an Ed25519 identity key.
    #[must_use]
    pub fn from_verifying_key(vk: &VerifyingKey) -> Self {
        Self(vk.to_montgomery().to_bytes())
    }
}

impl Ed25519Pk {
    /// Montgomery form of this key.
    ///
    /// # Errors
    ///
    /// See [`edwards_to_montgomery`].
    pub fn to_session_id(&self) -> Result<SessionId, BlindingError> {
        edwards_to_montgomery(&self.0).map(SessionId)
    }

    /// # Errors
    ///
    /// Returns `BlindingError::InvalidPoint` if the key does not decompress.
    pub fn to_verifying_key(&self) -> Result<VerifyingKey, BlindingError> {
        VerifyingKey::from_bytes(&self.0)
            .map_err(|_| BlindingError::InvalidPoint("not an ed25519 public key"))
    }
}

impl From<&VerifyingKey> for Ed25519Pk {
    fn from(vk: &VerifyingKey) -> Self {
        Self(vk.to_bytes())
    }
}
