//! Per-server key blinding for Session IDs.
//!
//! A blinded ID is `k·A`, where `A` is the Edwards form of the Session ID and
//! `k` is a hash-derived scalar (see [`crate::hashers`]). Multiplication is by
//! the raw reduced scalar, with no clamping.
//!
//! Legacy (`15`) blinding cannot know the sign of `A`'s x-coordinate, since the
//! Session ID is x-only. It therefore returns both candidate encodings as
//! [`LegacyCandidates`]. Callers pick a policy explicitly:
//! [`LegacyCandidates::canonical`] (top bit set) or
//! [`LegacyCandidates::contains`] (try both against a known ID).

use crate::{
    convert::{blindable_point, decompress, require_prime_order},
    errors::BlindingError,
    hashers::{blinding_factor_15, blinding_factor_25},
    identifier::{IdPrefix, Identifier},
    scalar::invert_scalar,
    types::{BlindedId, ServerPk, SessionId},
};

const SIGN_BIT: u8 = 0x80;

/// Both encodings a legacy blinded ID may take: `k·A` and the same
/// encoding with the sign bit of byte 31 flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyCandidates {
    pub primary: BlindedId,
    pub flipped: BlindedId,
}

impl LegacyCandidates {
    fn from_primary(primary: BlindedId) -> Self {
        let mut flipped = primary;
        flipped.0[31] ^= SIGN_BIT;
        Self { primary, flipped }
    }

    /// The candidate with the top bit set.
    #[must_use]
    pub const fn canonical(&self) -> BlindedId {
        if self.primary.0[31] & SIGN_BIT == 0 {
            self.flipped
        } else {
            self.primary
        }
    }

    #[must_use]
    pub fn contains(&self, blinded: &BlindedId) -> bool {
        self.primary == *blinded || self.flipped == *blinded
    }

    #[must_use]
    pub const fn to_array(&self) -> [BlindedId; 2] {
        [self.primary, self.flipped]
    }
}

/// Legacy (`15`) blinding of `session_id` for `server_pk`.
///
/// # Errors
///
/// Returns `BlindingError::InvalidPoint` if `session_id` is not a canonical
/// point of the prime-order subgroup of Curve25519.
pub fn blind_15(session_id: &SessionId, server_pk: &ServerPk) -> Result<LegacyCandidates, BlindingError> {
    let a = blindable_point(&session_id.0)?;
    let k = blinding_factor_15(server_pk);
    let ka = BlindedId((k * a).compress().to_bytes());
    let candidates = LegacyCandidates::from_primary(ka);
    tracing::trace!(
        session_id = %session_id,
        server_pk = %server_pk,
        primary = %candidates.primary,
        flipped = %candidates.flipped,
        "blind_15"
    );
    Ok(candidates)
}

/// Legacy blinding resolved with the top-bit rule.
///
/// # Errors
///
/// See [`blind_15`].
pub fn blind_15_canonical(session_id: &SessionId, server_pk: &ServerPk) -> Result<BlindedId, BlindingError> {
    let canonical = blind_15(session_id, server_pk)?.canonical();
    tracing::debug!(blinded = %canonical, "selected canonical 15 candidate");
    Ok(canonical)
}

/// New-scheme (`25`) blinding. The factor is bound to the session ID, so the
/// result is a single point.
///
/// # Errors
///
/// Returns `BlindingError::InvalidPoint` if `session_id` is not a canonical
/// point of the prime-order subgroup of Curve25519.
pub fn blind_25(session_id: &SessionId, server_pk: &ServerPk) -> Result<BlindedId, BlindingError> {
    let a = blindable_point(&session_id.0)?;
    let k = blinding_factor_25(session_id, server_pk);
    let blinded = BlindedId((k * a).compress().to_bytes());
    tracing::trace!(session_id = %session_id, server_pk = %server_pk, blinded = %blinded, "blind_25");
    Ok(blinded)
}

/// Recover the Session ID behind a legacy blinded ID. Either candidate of
/// [`blind_15`] unblinds to the same Session ID.
///
/// # Errors
///
/// Returns `BlindingError::InvalidPoint` if `blinded` does not decompress or
/// lies outside the prime-order subgroup, or `BlindingError::ZeroScalar` if
/// the blinding factor is degenerate.
pub fn unblind_15(blinded: &BlindedId, server_pk: &ServerPk) -> Result<SessionId, BlindingError> {
    let k_inv = invert_scalar(&blinding_factor_15(server_pk))?;
    let point = require_prime_order(
        decompress(&blinded.0, "blinded id does not decompress")?,
        "blinded id is not in the prime-order subgroup",
    )?;
    let session_id = SessionId((k_inv * point).to_montgomery().to_bytes());
    tracing::trace!(blinded = %blinded, server_pk = %server_pk, session_id = %session_id, "unblind_15");
    Ok(session_id)
}

/// Does `blinded` belong to `session_id` on the server `server_pk`?
/// `15` identifiers match either candidate, `25` identifiers must match
/// exactly.
///
/// # Errors
///
/// Returns `BlindingError::UnexpectedPrefix` for a `05` identifier, or any
/// error from the blinding itself.
pub fn matches_blinded(
    session_id: &SessionId,
    blinded: &Identifier,
    server_pk: &ServerPk,
) -> Result<bool, BlindingError> {
    let key = BlindedId(*blinded.key());
    let matched = match blinded.prefix() {
        IdPrefix::Blinded15 => blind_15(session_id, server_pk)?.contains(&key),
        IdPrefix::Blinded25 => blind_25(session_id, server_pk)? == key,
        IdPrefix::Session => {
            return Err(BlindingError::UnexpectedPrefix {
                expected: IdPrefix::Blinded15.byte(),
                got: IdPrefix::Session.byte(),
            })
        }
    };
    tracing::debug!(blinded = %blinded, matched, "matches_blinded");
    Ok(matched)
}
