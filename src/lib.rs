#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Session ID blinding
//!
//! Converts Session IDs (X25519 public keys) to and from their Ed25519 form,
//! derives per-server blinded IDs (`15` legacy and `25` session-bound),
//! unblinds legacy IDs, and computes the swarm-space placement value of a key.

// Fixed cryptographic choices:
// - Curve: Curve25519 / edwards25519 via curve25519-dalek
// - Hash-to-scalar: BLAKE2b-512, wide reduction mod ℓ
// - Scalar multiplication: unclamped
// - Identifier prefixes: 05 session, 15 legacy blinded, 25 session-bound blinded
//
// Every function is pure and stateless; there is no library context to set up.

// Core modules
pub mod types;
pub mod errors;
pub mod scalar;
pub mod convert;
pub mod hashers;
pub mod blinding;
pub mod identifier;
pub mod swarm;

// Re-export commonly used types and functions
pub use types::*;
pub use errors::BlindingError;
pub use scalar::{reduce_scalar, reduce_wide, invert_scalar};
pub use convert::{montgomery_to_edwards, edwards_to_montgomery};
pub use hashers::{blinding_factor_15, blinding_factor_25};
pub use blinding::{blind_15, blind_15_canonical, blind_25, unblind_15, matches_blinded, LegacyCandidates};
pub use identifier::{IdPrefix, Identifier};
pub use swarm::{swarm_space, swarm_space_u64};
pub use curve25519_dalek::Scalar;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
