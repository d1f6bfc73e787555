use blake2::{Blake2b512, Digest};
use curve25519_dalek::Scalar;
use crate::{scalar::reduce_wide, types::{BLAKE2B_WIDE_LEN, PREFIX_SESSION, ServerPk, SessionId}};

#[inline]
fn wide_digest(h: Blake2b512) -> [u8; BLAKE2B_WIDE_LEN] {
    let digest = h.finalize();
    let mut out = [0u8; BLAKE2B_WIDE_LEN];
    out.copy_from_slice(&digest);
    out
}

/// k = BLAKE2b-512( `server_pk` ) mod ℓ
#[must_use]
pub fn blinding_factor_15(server_pk: &ServerPk) -> Scalar {
    let mut h = Blake2b512::new();
    h.update(server_pk.0);
    reduce_wide(&wide_digest(h))
}

/// k = BLAKE2b-512( 0x05 || `session_id` || `server_pk` ) mod ℓ
#[must_use]
pub fn blinding_factor_25(session_id: &SessionId, server_pk: &ServerPk) -> Scalar {
    let mut h = Blake2b512::new();
    h.update([PREFIX_SESSION]);
    h.update(session_id.0);
    h.update(server_pk.0);
    reduce_wide(&wide_digest(h))
}
