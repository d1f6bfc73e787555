use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;
use crate::errors::BlindingError;

pub const KEY_LEN: usize = 32;                 // every key payload
pub const KEY_HEX_LEN: usize = 2 * KEY_LEN;    // 64 hex chars
pub const SWARM_SPACE_LEN: usize = 8;          // u64, big-endian
pub const BLAKE2B_WIDE_LEN: usize = 64;        // BLAKE2b-512 digest

// Identifier prefix bytes
pub const PREFIX_SESSION: u8 = 0x05;
pub const PREFIX_BLINDED_15: u8 = 0x15;
pub const PREFIX_BLINDED_25: u8 = 0x25;

// Fixed-size newtypes keep the four 32-byte payloads apart
/// Montgomery (X25519) public key, the payload of a `05` identifier.
#[repr(transparent)] #[derive(Clone, Copy, PartialEq, Eq, Hash)] pub struct SessionId(pub [u8; KEY_LEN]);
/// Edwards public key, untagged.
#[repr(transparent)] #[derive(Clone, Copy, PartialEq, Eq, Hash)] pub struct Ed25519Pk(pub [u8; KEY_LEN]);
/// Compressed Edwards point, the payload of a `15` or `25` identifier.
#[repr(transparent)] #[derive(Clone, Copy, PartialEq, Eq, Hash)] pub struct BlindedId(pub [u8; KEY_LEN]);
/// Server or community public key, hashed as raw bytes.
#[repr(transparent)] #[derive(Clone, Copy, PartialEq, Eq, Hash)] pub struct ServerPk(pub [u8; KEY_LEN]);

// Exact-sized decode helpers plus the lowercase hex codec
macro_rules! impl_key_bytes {
    ($t:ident, $name:literal) => {
        impl $t {
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; KEY_LEN] { &self.0 }

            #[must_use]
            pub const fn to_bytes(self) -> [u8; KEY_LEN] { self.0 }
        }

        impl TryFrom<&[u8]> for $t {
            type Error = BlindingError;
            fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
                if b.len() != KEY_LEN {
                    return Err(BlindingError::InvalidLength { expected: KEY_LEN, got: b.len() });
                }
                let mut arr = [0u8; KEY_LEN];
                arr.copy_from_slice(b);
                Ok(Self(arr))
            }
        }

        impl From<[u8; KEY_LEN]> for $t {
            fn from(b: [u8; KEY_LEN]) -> Self { Self(b) }
        }

        impl AsRef<[u8]> for $t {
            fn as_ref(&self) -> &[u8] { &self.0 }
        }

        impl FromStr for $t {
            type Err = BlindingError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.len() != KEY_HEX_LEN {
                    return Err(BlindingError::InvalidLength { expected: KEY_HEX_LEN, got: s.len() });
                }
                let mut arr = [0u8; KEY_LEN];
                hex::decode_to_slice(s, &mut arr)?;
                Ok(Self(arr))
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($name, "({})"), hex::encode(self.0))
            }
        }
    }
}
impl_key_bytes!(SessionId, "SessionId");
impl_key_bytes!(Ed25519Pk, "Ed25519Pk");
impl_key_bytes!(BlindedId, "BlindedId");
impl_key_bytes!(ServerPk, "ServerPk");
